#[derive(Debug, Clone)]
pub struct CheckItemInput {
    pub item_name: String,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
