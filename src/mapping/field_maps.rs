//! Accepted CSV header spellings and the canonical API field each one feeds.
//!
//! Tables are ordered: when several spellings of one field are present in a
//! row, the earliest entry wins.

/// Equity capture schema. Every field accepts the display header and the
/// canonical spelling, so already-normalized rows map onto themselves.
pub static EQUITY_FIELD_MAP: &[(&str, &str)] = &[
    ("Trade ID", "TradeID"),
    ("TradeID", "TradeID"),
    ("Order ID", "OrderID"),
    ("OrderID", "OrderID"),
    ("Client ID", "ClientID"),
    ("ClientID", "ClientID"),
    ("ISIN", "ISIN"),
    ("Symbol", "Symbol"),
    ("Trade Type", "TradeType"),
    ("TradeType", "TradeType"),
    ("Quantity", "Quantity"),
    ("Price", "Price"),
    ("Trade Value", "TradeValue"),
    ("TradeValue", "TradeValue"),
    ("Currency", "Currency"),
    ("Trade Date", "TradeDate"),
    ("TradeDate", "TradeDate"),
    ("Settlement Date", "SettlementDate"),
    ("SettlementDate", "SettlementDate"),
    ("Settlement Status", "SettlementStatus"),
    ("SettlementStatus", "SettlementStatus"),
    ("Counterparty", "Counterparty"),
    ("Trading Venue", "TradingVenue"),
    ("TradingVenue", "TradingVenue"),
    ("Trader Name", "TraderName"),
    ("TraderName", "TraderName"),
    ("KYC Status", "KYCStatus"),
    ("KYCStatus", "KYCStatus"),
    ("Reference Data Validated", "ReferenceDataValidated"),
    ("ReferenceDataValidated", "ReferenceDataValidated"),
    ("Commission", "Commission"),
    ("Taxes", "Taxes"),
    ("Total Cost", "TotalCost"),
    ("TotalCost", "TotalCost"),
    ("Confirmation Status", "ConfirmationStatus"),
    ("ConfirmationStatus", "ConfirmationStatus"),
    ("Country Of Trade", "CountryOfTrade"),
    ("CountryOfTrade", "CountryOfTrade"),
    ("Ops Team Notes", "OpsTeamNotes"),
    ("OpsTeamNotes", "OpsTeamNotes"),
    ("Pricing Source", "PricingSource"),
    ("PricingSource", "PricingSource"),
    ("Market Impact Cost", "MarketImpactCost"),
    ("MarketImpactCost", "MarketImpactCost"),
    ("FX Rate Applied", "FXRateApplied"),
    ("FXRateApplied", "FXRateApplied"),
    ("Net Amount", "NetAmount"),
    ("NetAmount", "NetAmount"),
    ("Collateral Required", "CollateralRequired"),
    ("CollateralRequired", "CollateralRequired"),
    ("Margin Type", "MarginType"),
    ("MarginType", "MarginType"),
    ("Margin Status", "MarginStatus"),
    ("MarginStatus", "MarginStatus"),
];

pub static EQUITY_NUMERIC_FIELDS: &[&str] = &[
    "TradeValue",
    "CollateralRequired",
    "Quantity",
    "Price",
    "Commission",
    "Taxes",
    "TotalCost",
    "MarketImpactCost",
    "FXRateApplied",
    "NetAmount",
];

pub static EQUITY_DATE_FIELDS: &[&str] = &["TradeDate", "SettlementDate"];

pub static EQUITY_YES_NO_FIELDS: &[&str] = &["ReferenceDataValidated"];

pub const EQUITY_DIRECTION_FIELD: &str = "TradeType";

/// FX capture schema. Some canonical names keep spaces ("Counterparty ID",
/// "Exception Type") because the ingest model stores them that way.
pub static FOREX_FIELD_MAP: &[(&str, &str)] = &[
    ("Trade ID", "TradeID"),
    ("TradeID", "TradeID"),
    ("Trade Date", "TradeDate"),
    ("TradeDate", "TradeDate"),
    ("Value Date", "ValueDate"),
    ("ValueDate", "ValueDate"),
    ("Trade Time", "TradeTime"),
    ("TradeTime", "TradeTime"),
    ("Trader ID", "TraderID"),
    ("TraderID", "TraderID"),
    ("Counterparty", "Counterparty"),
    ("Counterparty ID", "Counterparty ID"),
    ("CounterpartyID", "Counterparty ID"),
    ("LEI", "LEI"),
    ("Currency Pair", "CurrencyPair"),
    ("CurrencyPair", "CurrencyPair"),
    ("Buy/Sell", "BuySell"),
    ("BuySell", "BuySell"),
    ("Dealt Currency", "DealtCurrency"),
    ("DealtCurrency", "DealtCurrency"),
    ("Base Currency", "BaseCurrency"),
    ("BaseCurrency", "BaseCurrency"),
    ("Term Currency", "TermCurrency"),
    ("TermCurrency", "TermCurrency"),
    ("Notional Amount", "NotionalAmount"),
    ("NotionalAmount", "NotionalAmount"),
    ("FX Rate", "FXRate"),
    ("FXRate", "FXRate"),
    ("Trade Status", "TradeStatus"),
    ("TradeStatus", "TradeStatus"),
    ("Settlement Status", "SettlementStatus"),
    ("SettlementStatus", "SettlementStatus"),
    ("Settlement Method", "SettlementMethod"),
    ("SettlementMethod", "SettlementMethod"),
    ("Broker", "Broker"),
    ("Execution Venue", "ExecutionVenue"),
    ("ExecutionVenue", "ExecutionVenue"),
    ("Product Type", "ProductType"),
    ("ProductType", "ProductType"),
    ("Maturity Date", "MaturityDate"),
    ("MaturityDate", "MaturityDate"),
    ("Confirmation Timestamp", "ConfirmationTimestamp"),
    ("ConfirmationTimestamp", "ConfirmationTimestamp"),
    ("Settlement Date", "SettlementDate"),
    ("SettlementDate", "SettlementDate"),
    ("Booking Location", "BookingLocation"),
    ("BookingLocation", "BookingLocation"),
    ("Portfolio", "Portfolio"),
    ("Trade Version", "TradeVersion"),
    ("TradeVersion", "TradeVersion"),
    ("Cancellation Flag", "CancellationFlag"),
    ("CancellationFlag", "CancellationFlag"),
    ("Amendment Flag", "AmendmentFlag"),
    ("AmendmentFlag", "AmendmentFlag"),
    ("Risk System ID", "RiskSystemID"),
    ("RiskSystemID", "RiskSystemID"),
    ("Regulatory Reporting Status", "RegulatoryReportingStatus"),
    ("RegulatoryReportingStatus", "RegulatoryReportingStatus"),
    ("Trade Source System", "TradeSourceSystem"),
    ("TradeSourceSystem", "TradeSourceSystem"),
    ("Confirmation Method", "ConfirmationMethod"),
    ("ConfirmationMethod", "ConfirmationMethod"),
    ("Confirmation Status", "ConfirmationStatus"),
    ("ConfirmationStatus", "ConfirmationStatus"),
    ("Settlement Instructions", "SettlementInstructions"),
    ("SettlementInstructions", "SettlementInstructions"),
    ("Custodian", "Custodian_Name"),
    ("Custodian_Name", "Custodian_Name"),
    ("Netting Eligibility", "NettingEligibility"),
    ("NettingEligibility", "NettingEligibility"),
    ("Trade Compliance Status", "TradeComplianceStatus"),
    ("TradeComplianceStatus", "TradeComplianceStatus"),
    ("KYC Check", "KYCCheck"),
    ("KYCCheck", "KYCCheck"),
    ("Sanctions Screening", "SanctionsScreening"),
    ("SanctionsScreening", "SanctionsScreening"),
    ("Exception Flag", "ExceptionFlag"),
    ("ExceptionFlag", "ExceptionFlag"),
    ("Audit Trail Ref", "AuditTrailRef"),
    ("AuditTrailRef", "AuditTrailRef"),
    ("Commission Amount", "CommissionAmount"),
    ("CommissionAmount", "CommissionAmount"),
    ("Commission Currency", "CommissionCurrency"),
    ("CommissionCurrency", "CommissionCurrency"),
    ("Brokerage Fee", "BrokerageFee"),
    ("BrokerageFee", "BrokerageFee"),
    ("Brokerage Currency", "BrokerageCurrency"),
    ("BrokerageCurrency", "BrokerageCurrency"),
    ("Custody Fee", "CustodyFee"),
    ("CustodyFee", "CustodyFee"),
    ("Custody Currency", "CustodyCurrency"),
    ("CustodyCurrency", "CustodyCurrency"),
    ("Settlement Cost", "SettlementCost"),
    ("SettlementCost", "SettlementCost"),
    ("Settlement Currency", "SettlementCurrency"),
    ("SettlementCurrency", "SettlementCurrency"),
    ("FX Gain/Loss", "FXGainLoss"),
    ("FXGainLoss", "FXGainLoss"),
    ("P&L Calculated", "PnlCalculated"),
    ("PnlCalculated", "PnlCalculated"),
    ("Cost Allocation Status", "CostAllocationStatus"),
    ("CostAllocationStatus", "CostAllocationStatus"),
    ("Cost Center", "CostCenter"),
    ("CostCenter", "CostCenter"),
    ("Expense Approval Status", "ExpenseApprovalStatus"),
    ("ExpenseApprovalStatus", "ExpenseApprovalStatus"),
    ("Cost Booked Date", "CostBookedDate"),
    ("CostBookedDate", "CostBookedDate"),
    ("Exception Type", "Exception Type"),
    ("Exception Description", "Exception Description"),
    ("Exception Resolution", "Exception Resolution"),
    ("Reporting Regulation", "Reporting Regulation"),
    ("Exception Reason", "Exception Reason"),
    ("Reporting Resolution", "Reporting Resolution"),
    ("RID", "RID"),
    ("ISIN", "ISIN"),
    ("Symbol", "Symbol"),
    ("Trading Venue", "Trading Venue"),
    ("Stock_Currency", "Stock_Currency"),
    ("Country_of_Trade", "Country_of_Trade"),
    ("Instrument_Status", "Instrument_Status"),
    ("ClientID_Equity", "ClientID_Equity"),
    ("KYC_Status_Equity", "KYC_Status_Equity"),
    ("Reference_Data_Validated", "Reference_Data_Validated"),
    ("Margin_Type", "Margin_Type"),
    ("Margin_Status", "Margin_Status"),
    ("Client_Approval_Status_Equity", "Client_Approval_Status_Equity"),
    ("ClientID_Forex", "ClientID_Forex"),
    ("KYC_Status_Forex", "KYC_Status_Forex"),
    ("Expense_Approval_Status", "Expense_Approval_Status"),
    ("Client Approval Status(forex)", "Client Approval Status(forex)"),
    ("Custodian_Ac_no", "Custodian_Ac_no"),
    ("Beneficiary_Client_ID", "Beneficiary_Client_ID"),
    ("Settlement_Cycle", "Settlement_Cycle"),
    ("EffectiveDate_Equity", "EffectiveDate_Equity"),
    ("ConfirmationStatus_Equity", "ConfirmationStatus_Equity"),
    ("SWIFT_Equity", "SWIFT_Equity"),
    ("BeneficiaryName_Equity", "BeneficiaryName_Equity"),
    ("Account_Number_Equity", "Account_Number_Equity"),
    ("ABA_Equity", "ABA_Equity"),
    ("BSB_Equity", "BSB_Equity"),
    ("IBAN_Equity", "IBAN_Equity"),
    ("SORT_Equity", "SORT_Equity"),
    ("Zengin_Equity", "Zengin_Equity"),
    ("Settlement_Method_Equity", "Settlement_Method_Equity"),
    ("EffectiveDate_Forex", "EffectiveDate_Forex"),
    ("ConfirmationStatus_Forex", "ConfirmationStatus_Forex"),
    ("Account Number_Forex", "Account Number_Forex"),
    ("SWIFT_Forex", "SWIFT_Forex"),
    ("BeneficiaryName_Forex", "BeneficiaryName_Forex"),
    ("ABA_Forex", "ABA_Forex"),
    ("BSB_Forex", "BSB_Forex"),
    ("IBAN_Forex", "IBAN_Forex"),
    ("SORT_Forex", "SORT_Forex"),
    ("Zengin_Forex", "Zengin_Forex"),
    ("Settlement_Method_Forex", "Settlement_Method_Forex"),
];

pub static FOREX_NUMERIC_FIELDS: &[&str] = &[
    "NotionalAmount",
    "FXRate",
    "CommissionAmount",
    "BrokerageFee",
    "CustodyFee",
    "SettlementCost",
    "FXGainLoss",
    "PnlCalculated",
];

pub static FOREX_INTEGER_FIELDS: &[&str] = &["TradeVersion"];
