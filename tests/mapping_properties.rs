use trade_mapper::mapping::{map_row, map_row_with_warnings, CellValue, FieldValue, RawRow, Schema};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

fn single(schema: Schema, header: &str, cell: CellValue, field: &str) -> FieldValue {
    let mut raw = RawRow::new();
    raw.insert(header, cell);
    map_row(schema, &raw).get(field).cloned().unwrap()
}

#[test]
fn test_amounts_with_symbols_and_separators() {
    for input in ["$1,234.56", "1,234.56", " USD 1,234.56 ", "£1,234.56"] {
        assert_eq!(
            single(Schema::Equity, "Trade Value", CellValue::from(input), "TradeValue"),
            FieldValue::Float(1234.56),
            "{input}"
        );
        assert_eq!(
            single(Schema::Forex, "Notional Amount", CellValue::from(input), "NotionalAmount"),
            FieldValue::Float(1234.56),
            "{input}"
        );
    }
}

#[test]
fn test_empty_or_unparsable_numbers_default_to_zero() {
    for input in ["", "   ", "n/a", "--"] {
        assert_eq!(
            single(Schema::Equity, "Commission", CellValue::from(input), "Commission"),
            FieldValue::Float(0.0),
            "{input:?}"
        );
        assert_eq!(
            single(Schema::Forex, "Trade Version", CellValue::from(input), "TradeVersion"),
            FieldValue::Integer(0),
            "{input:?}"
        );
    }
}

#[test]
fn test_date_examples() {
    for (input, expected) in [
        ("24/1/2025", "2025-01-24"),
        ("2025-1-5", "2025-01-05"),
        ("13-05-2025", "2025-05-13"),
    ] {
        assert_eq!(
            single(Schema::Equity, "Trade Date", CellValue::from(input), "TradeDate"),
            FieldValue::text(expected),
            "{input}"
        );
    }
}

#[test]
fn test_unrecognized_date_passes_through_unchanged() {
    let (record, warnings) = map_row_with_warnings(Schema::Equity, &row(&[("Settlement Date", "T+2")]));
    assert_eq!(record.get("SettlementDate"), Some(&FieldValue::text("T+2")));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_trade_direction_synonyms() {
    for (input, expected) in [("buy", "BUY"), ("BUY", "BUY"), ("B", "BUY"), ("sell", "SELL"), ("S", "SELL")] {
        assert_eq!(
            single(Schema::Equity, "Trade Type", CellValue::from(input), "TradeType"),
            FieldValue::text(expected),
            "{input}"
        );
    }
}

#[test]
fn test_yes_no_synonyms() {
    let cases = [
        (CellValue::from("Yes"), "Yes"),
        (CellValue::from("y"), "Yes"),
        (CellValue::from("1"), "Yes"),
        (CellValue::Bool(true), "Yes"),
        (CellValue::from("No"), "No"),
        (CellValue::from("n"), "No"),
        (CellValue::from("0"), "No"),
        (CellValue::Bool(false), "No"),
    ];
    for (cell, expected) in cases {
        assert_eq!(
            single(Schema::Equity, "Reference Data Validated", cell.clone(), "ReferenceDataValidated"),
            FieldValue::text(expected),
            "{cell:?}"
        );
    }
}

#[test]
fn test_remapping_is_idempotent() {
    let equity = row(&[
        ("Trade ID", "  EQ-77 "),
        ("Trade Type", "b"),
        ("Quantity", "2,500"),
        ("Price", "$10.25"),
        ("Trade Date", "5/6/2025"),
        ("Settlement Date", "05-13-2025"),
        ("Reference Data Validated", "false"),
        ("Ops Team Notes", " checked "),
    ]);
    let forex = row(&[
        ("Trade ID", "FX-77"),
        ("Currency Pair", " EUR/USD "),
        ("FX Rate", "1.0842"),
        ("Notional Amount", "5,000,000"),
        ("Trade Version", "4"),
        ("P&L Calculated", "-1,250.75"),
    ]);

    for (schema, raw) in [(Schema::Equity, equity), (Schema::Forex, forex)] {
        let once = map_row(schema, &raw);
        let twice = map_row(schema, &once.to_raw_row());
        assert_eq!(once, twice, "{schema}");
    }
}

#[test]
fn test_unknown_headers_dropped_and_missing_fields_defaulted() {
    let record = map_row(Schema::Forex, &row(&[("Trade ID", "FX-1"), ("Desk", "Rates")]));

    assert!(!record.contains("Desk"));
    assert_eq!(record.len(), Schema::Forex.canonical_fields().len());
    assert_eq!(record.get("FXRate"), Some(&FieldValue::Float(0.0)));
    assert_eq!(record.get("TradeVersion"), Some(&FieldValue::Integer(0)));
    assert_eq!(record.get("Counterparty ID"), Some(&FieldValue::text("")));
    assert_eq!(record.get("Custodian_Name"), Some(&FieldValue::text("")));
}

#[test]
fn test_forex_header_aliases() {
    let record = map_row(
        Schema::Forex,
        &row(&[("Custodian", "BNY Mellon"), ("CounterpartyID", "CP-9"), ("Buy/Sell", " Buy ")]),
    );

    assert_eq!(record.get("Custodian_Name"), Some(&FieldValue::text("BNY Mellon")));
    assert_eq!(record.get("Counterparty ID"), Some(&FieldValue::text("CP-9")));
    // forex direction is carried as trimmed text
    assert_eq!(record.get("BuySell"), Some(&FieldValue::text("Buy")));
}
