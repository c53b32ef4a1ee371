/// Where a chart's question sits on the page.
///
/// The drawer asks this for the printed question number of the input that
/// currently has focus. Returning `None` just omits the label.
pub trait QuestionContext {
    fn question_number(&self) -> Option<String>;
}

impl QuestionContext for str {
    fn question_number(&self) -> Option<String> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl QuestionContext for String {
    fn question_number(&self) -> Option<String> {
        self.as_str().question_number()
    }
}

/// A question block as the page describes it: the question number label
/// and the ids of the inputs it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBlock {
    pub number_label: Option<String>,
    pub input_ids: Vec<String>,
}

impl QuestionBlock {
    #[must_use]
    pub fn new(number_label: impl Into<String>) -> Self {
        Self {
            number_label: Some(number_label.into()),
            input_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_input(mut self, id: impl Into<String>) -> Self {
        self.input_ids.push(id.into());
        self
    }

    #[must_use]
    pub fn contains(&self, input_id: &str) -> bool {
        self.input_ids.iter().any(|id| id == input_id)
    }
}

impl QuestionContext for QuestionBlock {
    fn question_number(&self) -> Option<String> {
        self.number_label
            .as_deref()
            .and_then(|label| label.question_number())
    }
}

/// Find the block enclosing `input_id`.
#[must_use]
pub fn enclosing_block<'a>(
    blocks: &'a [QuestionBlock],
    input_id: &str,
) -> Option<&'a QuestionBlock> {
    blocks.iter().find(|block| block.contains(input_id))
}
