use chrono::{DateTime, Duration};
use fisco::core::*;
use fisco::tax::{compute_document_taxes, InMemoryRateTable};
use fisco::validation::{validate_cancellation, CancellationPolicy, DocumentStore, StoreError};
use rust_decimal_macros::dec;

struct NoStore;

impl DocumentStore for NoStore {
    fn sequence_in_use(&self, _: &str, _: u16, _: u32) -> Result<bool, StoreError> {
        Ok(false)
    }

    fn is_settled(&self, _: &str) -> Result<bool, StoreError> {
        Ok(false)
    }
}

fn main() {
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
            TaxpayerId::parse("11222333000181").unwrap(),
            "São Paulo",
            Uf::Sp,
        )
        .state_registration("110042490114")
        .build(),
    )
    .recipient(
        RecipientBuilder::new(
            "Hospital das Clinicas",
            TaxpayerId::parse("45723174000110").unwrap(),
        )
        .build(),
    )
    .add_line(
        LineItemBuilder::new("SKU-001", "Monitor multiparametro", dec!(2), "UN", dec!(150.00))
            .classification("90181200")
            .cfop("5102")
            .build(),
    )
    .build()
    .expect("document should be valid");

    let rates = InMemoryRateTable::new()
        .with_rate(Tax::Icms, "90181200", Uf::Sp, TaxRegime::RegimeNormal, dec!(18))
        .with_rate(Tax::Pis, "90181200", Uf::Sp, TaxRegime::RegimeNormal, dec!(1.65))
        .with_rate(Tax::Cofins, "90181200", Uf::Sp, TaxRegime::RegimeNormal, dec!(7.6));
    compute_document_taxes(&mut document, &rates).expect("rates should cover every line");
    let key = generate_access_key(&document, 12_345_678).expect("fields should fit the key");
    document.access_key = Some(key);

    // A draft can never cancel, whatever the clock says
    let policy = CancellationPolicy::default();
    let report = validate_cancellation(&document, document.issued_at, &policy, &NoStore);
    println!("Draft:               {}", report);

    // Authorize it, then try inside and outside the 24 h window
    document.transition(DocumentStatus::Generated).unwrap();
    document.transition(DocumentStatus::Authorized).unwrap();

    let after_2h = document.issued_at + Duration::hours(2);
    let report = validate_cancellation(&document, after_2h, &policy, &NoStore);
    println!("Authorized, +2 h:    {}", report);

    let after_30h = document.issued_at + Duration::hours(30);
    let report = validate_cancellation(&document, after_30h, &policy, &NoStore);
    println!("Authorized, +30 h:   {}", report);

    // São Paulo stretched to 48 h by configuration
    let stretched = CancellationPolicy::default().with_override(Uf::Sp, Duration::hours(48));
    let report = validate_cancellation(&document, after_30h, &stretched, &NoStore);
    println!("With SP override:    {}", report);
}
