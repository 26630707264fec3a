use chrono::DateTime;
use fisco::core::*;
use fisco::tax::{compute_document_taxes, InMemoryRateTable};
use fisco::validation::{validate_pre_submission, DocumentStore, StoreError};
use rust_decimal_macros::dec;

// In-memory stand-in for the issued-documents store.
struct MemoryStore {
    used_numbers: Vec<u32>,
}

impl DocumentStore for MemoryStore {
    fn sequence_in_use(&self, _issuer: &str, _series: u16, number: u32) -> Result<bool, StoreError> {
        Ok(self.used_numbers.contains(&number))
    }

    fn is_settled(&self, _document_id: &str) -> Result<bool, StoreError> {
        Ok(false)
    }
}

fn main() {
    // Build a services document, compute taxes, attach the key
    let mut document = DocumentBuilder::new(
        DocumentKind::Nfse,
        1,
        7,
        DateTime::parse_from_rfc3339("2024-08-15T10:30:00-03:00").unwrap(),
    )
    .nature("Prestação de serviços")
    .issuer(
        IssuerBuilder::new(
            "Arvo Servicos Medicos Ltda",
            TaxpayerId::parse("11222333000181").unwrap(),
            "São Paulo",
            Uf::Sp,
        )
        .municipal_registration("39104712")
        .build(),
    )
    .recipient(
        RecipientBuilder::new("Joana da Silva", TaxpayerId::parse("111.444.777-35").unwrap())
            .build(),
    )
    .add_line(
        LineItemBuilder::new("CONS-01", "Consulta médica", dec!(1), "UN", dec!(300.00))
            .classification("04.01")
            .build(),
    )
    .build()
    .expect("document should be valid");

    let rates = InMemoryRateTable::new()
        .with_rate(Tax::Iss, "04.01", Uf::Sp, TaxRegime::RegimeNormal, dec!(5))
        .with_rate(Tax::Pis, "04.01", Uf::Sp, TaxRegime::RegimeNormal, dec!(0.65))
        .with_rate(Tax::Cofins, "04.01", Uf::Sp, TaxRegime::RegimeNormal, dec!(3));
    compute_document_taxes(&mut document, &rates).expect("rates should cover every line");

    let key = generate_access_key(&document, 99).expect("fields should fit the key");
    document.access_key = Some(key);

    // A well-formed document passes with no findings
    let store = MemoryStore { used_numbers: vec![] };
    let report = validate_pre_submission(&document, &store);
    println!("Clean document: {}", report);

    // Damage it: a recipient id that fails its check digits, a line with
    // no service classification, and a sequence number already issued
    document.recipient.id = TaxpayerId::parse("111.444.777-36").unwrap();
    document.lines[0].classification = String::new();
    let store = MemoryStore { used_numbers: vec![7] };

    let report = validate_pre_submission(&document, &store);
    println!();
    println!(
        "Damaged document: {} findings ({} errors)",
        report.len(),
        report.errors().count()
    );
    for finding in report.findings() {
        println!("  {finding}");
    }
    println!("passing = {}", report.passing());

    // Numbers the issuer would draw next for this series
    let mut sequence = DocumentSequence::starting_at(1, 8).unwrap();
    println!();
    println!("Next numbers in series {}:", sequence.series());
    for _ in 0..3 {
        println!("  {}", sequence.next_number().unwrap());
    }
}
