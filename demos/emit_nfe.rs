use chrono::DateTime;
use fisco::core::*;
use fisco::tax::{compute_document_taxes, InMemoryRateTable};
use fisco::xml;
use rust_decimal_macros::dec;

fn main() {
    // Build a goods document for a São Paulo issuer
    let mut document = DocumentBuilder::new(
        DocumentKind::Nfe,
        1,
        42,
        DateTime::parse_from_rfc3339("2024-08-15T10:30:00-03:00").unwrap(),
    )
    .nature("Venda de mercadoria")
    .issuer(
        IssuerBuilder::new(
            "Arvo Comercio de Equipamentos Ltda",
            TaxpayerId::parse("11.222.333/0001-81").unwrap(),
            "São Paulo",
            Uf::Sp,
        )
        .state_registration("110042490114")
        .city_code("3550308")
        .build(),
    )
    .recipient(
        RecipientBuilder::new(
            "Hospital das Clinicas",
            TaxpayerId::parse("45.723.174/0001-10").unwrap(),
        )
        .build(),
    )
    .add_line(
        LineItemBuilder::new("SKU-001", "Monitor multiparametro", dec!(2), "UN", dec!(150.00))
            .classification("90181200")
            .cfop("5102")
            .build(),
    )
    .add_line(
        LineItemBuilder::new("SKU-002", "Cabo de ECG", dec!(5), "UN", dec!(45.00))
            .classification("90181200")
            .cfop("5102")
            .build(),
    )
    .build()
    .expect("document should be valid");

    // Rates are injected; the engine ships none of its own
    let rates = InMemoryRateTable::new()
        .with_rate(Tax::Icms, "90181200", Uf::Sp, TaxRegime::RegimeNormal, dec!(18))
        .with_rate(Tax::Pis, "90181200", Uf::Sp, TaxRegime::RegimeNormal, dec!(1.65))
        .with_rate(Tax::Cofins, "90181200", Uf::Sp, TaxRegime::RegimeNormal, dec!(7.6));
    compute_document_taxes(&mut document, &rates).expect("rates should cover every line");

    // Access key, then the wire XML
    let key = generate_access_key(&document, 12_345_678).expect("fields should fit the key");
    document.access_key = Some(key);
    let rendered = xml::render(&document).expect("document should render");
    document.mark_generated(rendered).expect("draft should become generated");

    let totals = document.totals.as_ref().unwrap();
    println!("Document: NF-e series {} number {}", document.series, document.number);
    println!("Issuer:   {}", document.issuer.name);
    println!("Key:      {}", document.access_key.as_ref().unwrap());
    println!("Status:   {}", document.status);
    println!("---");
    for line in &document.lines {
        println!(
            "  {} x {} @ {} = {}",
            line.quantity,
            line.description,
            line.unit_value,
            line.gross_value()
        );
    }
    println!("---");
    println!("Base:     {}", totals.taxable_base);
    println!("ICMS:     {}", totals.icms_total);
    println!("PIS:      {}", totals.pis_total);
    println!("COFINS:   {}", totals.cofins_total);
    println!("Charged:  {}", totals.document_total);
    println!();
    println!("{}", document.rendered.as_ref().unwrap());
}
