use crate::modules::estimates::core::line_items::LineItemInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviseEstimate {
    pub estimate_id: String,
    pub project_id: String,
    pub items: Vec<LineItemInput>,
    pub notes: Option<String>,
    pub revised_at: i64,
    pub revised_by: String,
}
