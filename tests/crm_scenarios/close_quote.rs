//! Quote closing scenarios.

use crmsim::{CloseQuoteRequest, ColumnSet, Entity, ErrorKind, OptionSetValue, ServiceContext};

use crate::{seed, service};

#[test]
fn test_close_quote_sets_status_code() {
    let mut service = service();
    let quote = seed(&mut service, Entity::new("quote").with("name", "Q-0042"));

    service
        .execute_message(CloseQuoteRequest {
            quote_close: Entity::new("quoteclose")
                .with("quoteid", quote.clone())
                .with("subject", "Won"),
            status: OptionSetValue::new(5),
        })
        .unwrap();

    let stored = service.retrieve("quote", quote.id, &ColumnSet::All).unwrap();
    assert_eq!(
        stored.get_typed::<OptionSetValue>("statuscode").unwrap(),
        Some(OptionSetValue::new(5))
    );
    assert_eq!(service.store().count("quoteclose"), 0);
}

#[test]
fn test_close_quote_without_quote_reference_faults() {
    let mut service = service();
    let err = service
        .execute_message(CloseQuoteRequest {
            quote_close: Entity::new("quoteclose").with("subject", "Lost"),
            status: OptionSetValue::new(6),
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
}
