use pdfgate::domain::{PageText, ProcessingResult};

#[test]
fn given_pages_when_building_result_then_text_joins_pages_with_blank_line() {
    let result = ProcessingResult::from_pages(
        3,
        vec![
            PageText {
                page_number: 1,
                text: "first".to_string(),
            },
            PageText {
                page_number: 3,
                text: "third".to_string(),
            },
        ],
    );

    assert_eq!(result.text, "first\n\nthird");
    assert_eq!(result.page_count, 3);
    assert_eq!(result.pages.len(), 2);
}

#[test]
fn given_no_pages_when_building_result_then_text_is_empty() {
    let result = ProcessingResult::from_pages(2, vec![]);

    assert!(result.text.is_empty());
    assert!(result.pages.is_empty());
    assert_eq!(result.page_count, 2);
}

#[test]
fn given_result_when_serialized_then_exposes_pages_and_text() {
    let result = ProcessingResult::from_pages(
        1,
        vec![PageText {
            page_number: 1,
            text: "hello".to_string(),
        }],
    );

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["page_count"], 1);
    assert_eq!(json["pages"][0]["page_number"], 1);
    assert_eq!(json["text"], "hello");
}
