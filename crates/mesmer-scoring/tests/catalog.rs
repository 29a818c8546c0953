use mesmer_core::models::question::Category;
use mesmer_scoring::catalog;

#[test]
fn battery_has_36_questions_with_sequential_ids() {
    let ids: Vec<u8> = catalog::questions().iter().map(|q| q.id).collect();
    let expected: Vec<u8> = (1..=36).collect();
    assert_eq!(ids, expected);
}

#[test]
fn questionnaires_split_the_battery_evenly() {
    for question in catalog::questions() {
        let expected_questionnaire = if question.id <= 18 { 1 } else { 2 };
        assert_eq!(question.questionnaire, expected_questionnaire);

        let expected_category = if question.questionnaire == 1 {
            Category::Physical
        } else {
            Category::Emotional
        };
        assert_eq!(question.category, expected_category, "question {}", question.id);
    }
}

#[test]
fn weights_follow_the_published_battery() {
    for question in catalog::questions() {
        let expected = if matches!(question.id, 1 | 2 | 19 | 20) { 10 } else { 5 };
        assert_eq!(question.weight, expected, "question {}", question.id);
    }
}

#[test]
fn each_questionnaire_maximum_is_100() {
    let sum = |category: Category| -> u16 {
        catalog::questions()
            .iter()
            .filter(|q| q.category == category)
            .map(|q| u16::from(q.weight))
            .sum()
    };
    assert_eq!(sum(Category::Physical), 100);
    assert_eq!(sum(Category::Emotional), 100);
}

#[test]
fn presentation_metadata_is_present_on_every_question() {
    for question in catalog::questions() {
        assert!(!question.text.is_empty(), "question {}", question.id);
        assert!(!question.tooltip.is_empty(), "question {}", question.id);
        assert!(!question.icon.is_empty(), "question {}", question.id);
        assert!(question.example.is_some(), "question {}", question.id);
    }
}

#[test]
fn questionnaire_carries_published_source_metadata() {
    let questionnaire = catalog::questionnaire();
    assert_eq!(questionnaire.name, "HMI E&P Suggestibility Assessment");
    assert_eq!(questionnaire.version, "1.0");
    assert_eq!(questionnaire.methodology, mesmer_scoring::METHODOLOGY);
    assert_eq!(questionnaire.questions.len(), 36);
}
