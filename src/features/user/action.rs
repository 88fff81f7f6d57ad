/// Every action the `/user` resource answers to. Unknown segments have no
/// variant and are turned away by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    List,
}

impl UserAction {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "list" => Some(UserAction::List),
            _ => None,
        }
    }
}
