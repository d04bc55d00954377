use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;
use trade_mapper::app::upload_use_case::UploadUseCase;
use trade_mapper::{csv_source, map_rows, Schema};

const EQUITY_CSV: &str = "\
Trade ID,Order ID,Client ID,ISIN,Symbol,Trade Type,Quantity,Price,Trade Value,Currency,Trade Date,Settlement Date,Reference Data Validated,Counterparty
EQ-1001,ORD-1,CL-9,US0378331005,AAPL,Buy,100,\"$189.50\",\"$18,950.00\",USD,24/1/2025,2025-1-28,Y, Morgan Stanley
EQ-1002,ORD-2,CL-9,US5949181045,MSFT,S,\"1,000\",410.1,\"410,100\",USD,13-05-2025,15-05-2025,no,Citi

";

#[test]
fn test_equity_csv_to_ingest_json() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("equity_batch.csv");
    fs::write(&path, EQUITY_CSV)?;

    let schema = Schema::from_file_name(&path)?;
    let rows = csv_source::read_file(&path)?;
    let records = map_rows(schema, &rows);
    let body: Value = serde_json::to_value(&records)?;

    assert_eq!(body.as_array().map(|a| a.len()), Some(2));

    let first = &body[0];
    assert_eq!(first["TradeID"], json!("EQ-1001"));
    assert_eq!(first["TradeType"], json!("BUY"));
    assert_eq!(first["Quantity"], json!(100.0));
    assert_eq!(first["Price"], json!(189.5));
    assert_eq!(first["TradeValue"], json!(18950.0));
    assert_eq!(first["TradeDate"], json!("2025-01-24"));
    assert_eq!(first["SettlementDate"], json!("2025-01-28"));
    assert_eq!(first["ReferenceDataValidated"], json!("Yes"));
    assert_eq!(first["Counterparty"], json!("Morgan Stanley"));
    // canonical fields the file never had
    assert_eq!(first["Taxes"], json!(0.0));
    assert_eq!(first["MarginStatus"], json!(""));

    let second = &body[1];
    assert_eq!(second["TradeType"], json!("SELL"));
    assert_eq!(second["Quantity"], json!(1000.0));
    assert_eq!(second["TradeDate"], json!("2025-05-13"));
    assert_eq!(second["SettlementDate"], json!("2025-05-15"));
    assert_eq!(second["ReferenceDataValidated"], json!("No"));

    Ok(())
}

#[test]
fn test_prepare_reports_fallbacks() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("FX_trades.csv");
    fs::write(
        &path,
        "TradeID,NotionalAmount,FXRate,TradeVersion\nFX-1,\"1,000,000\",1.08,2\nFX-2,TBC,1.09,v3\n",
    )?;

    let (schema, records, summary) = UploadUseCase::prepare(&path)?;

    assert_eq!(schema, Schema::Forex);
    assert_eq!(records.len(), 2);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.rows_with_warnings, 1);
    assert_eq!(summary.total_warnings(), 2);
    Ok(())
}

#[test]
fn test_spreadsheet_export_with_windows_1252_currency() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("equity_gbp.csv");
    fs::write(&path, b"Trade ID,Price,Trade Value\nEQ-9,\xA312.50,\"\xA31,250.00\"\n")?;

    let records = map_rows(Schema::Equity, &csv_source::read_file(&path)?);
    let body: Value = serde_json::to_value(&records)?;

    assert_eq!(body[0]["TradeID"], json!("EQ-9"));
    assert_eq!(body[0]["Price"], json!(12.5));
    assert_eq!(body[0]["TradeValue"], json!(1250.0));
    Ok(())
}
