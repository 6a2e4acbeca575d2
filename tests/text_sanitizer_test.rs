use taxdoc::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_sanitizing_then_decomposes_to_fi() {
    let input = "ﬁling the ﬁnal return";
    let result = sanitize_extracted_text(input);
    assert_eq!(result, "filing the final return");
}

#[test]
fn given_text_with_excessive_newlines_when_sanitizing_then_collapses_to_paragraph_breaks() {
    let input = "income details\n\n\n\n\ndeduction details";
    let result = sanitize_extracted_text(input);
    assert_eq!(result, "income details\n\ndeduction details");
}

#[test]
fn given_text_with_redundant_spaces_when_sanitizing_then_collapses_to_single_space() {
    let input = "Gross    salary   12,00,000";
    let result = sanitize_extracted_text(input);
    assert_eq!(result, "Gross salary 12,00,000");
}

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
}

#[test]
fn given_whitespace_only_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text("   \n\n  "), "");
}

#[test]
fn given_text_with_hyphenated_line_break_when_sanitizing_then_merges_word() {
    let input = "standard deduc-\ntion applies";
    let result = sanitize_extracted_text(input);
    assert_eq!(result, "standard deduction applies");
}

#[test]
fn given_text_with_intentional_hyphen_when_sanitizing_then_preserves_hyphen() {
    let input = "self-assessment tax";
    let result = sanitize_extracted_text(input);
    assert_eq!(result, "self-assessment tax");
}

#[test]
fn given_text_with_list_marker_hyphen_when_sanitizing_then_preserves_list() {
    let input = "Deductions:\n- 80C investments\n- 80D premiums";
    let result = sanitize_extracted_text(input);
    assert_eq!(result, "Deductions:\n- 80C investments\n- 80D premiums");
}
