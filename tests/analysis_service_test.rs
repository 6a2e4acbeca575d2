use taxdoc::application::services::{
    build_extraction_prompt, parse_extraction_response, ResponseParseError,
};
use taxdoc::domain::TaxRegime;

#[test]
fn given_document_text_when_building_prompt_then_appends_text_after_instructions() {
    let prompt = build_extraction_prompt("Gross salary: 12,00,000");

    assert!(prompt.contains("tax document analyzer"));
    assert!(prompt.contains("\"taxRegime\": \"old\" or \"new\""));
    assert!(prompt.ends_with("Document text:\nGross salary: 12,00,000"));
}

#[test]
fn given_bare_json_when_parsing_then_returns_extraction() {
    let raw = r#"{"incomeDetails": {"salaryIncome": 500000}, "taxRegime": "new"}"#;

    let extraction = parse_extraction_response(raw).unwrap();

    assert_eq!(extraction.income_details.salary_income, 500_000.0);
    assert_eq!(extraction.tax_regime, TaxRegime::New);
}

#[test]
fn given_json_inside_markdown_fence_when_parsing_then_returns_extraction() {
    let raw = "```json\n{\"incomeDetails\": {\"salaryIncome\": 750000}}\n```";

    let extraction = parse_extraction_response(raw).unwrap();

    assert_eq!(extraction.income_details.salary_income, 750_000.0);
}

#[test]
fn given_json_wrapped_in_prose_when_parsing_then_returns_extraction() {
    let raw = "Sure! Based on the document:\n{\"taxRegime\": \"new\"}\nHope that helps.";

    let extraction = parse_extraction_response(raw).unwrap();

    assert_eq!(extraction.tax_regime, TaxRegime::New);
}

#[test]
fn given_response_without_braces_when_parsing_then_returns_no_json_object() {
    let result = parse_extraction_response("I could not read this document.");

    assert!(matches!(result, Err(ResponseParseError::NoJsonObject)));
}

#[test]
fn given_closing_brace_before_opening_when_parsing_then_returns_no_json_object() {
    let result = parse_extraction_response("} nothing here {");

    assert!(matches!(result, Err(ResponseParseError::NoJsonObject)));
}

#[test]
fn given_truncated_json_when_parsing_then_returns_invalid_json() {
    let result = parse_extraction_response(r#"{"incomeDetails": {"salaryIncome": }"#);

    assert!(matches!(result, Err(ResponseParseError::InvalidJson(_))));
}

#[test]
fn given_ill_typed_amount_when_parsing_then_returns_invalid_json() {
    let result =
        parse_extraction_response(r#"{"incomeDetails": {"salaryIncome": "twelve lakh"}}"#);

    assert!(matches!(result, Err(ResponseParseError::InvalidJson(_))));
}

#[test]
fn given_missing_fields_when_parsing_then_applies_fallback_defaults() {
    let extraction = parse_extraction_response("{}").unwrap();

    assert_eq!(extraction.income_details.salary_income, 0.0);
    assert_eq!(extraction.deduction_details.section_80c, 0.0);
    assert_eq!(extraction.tax_regime, TaxRegime::Old);
}
