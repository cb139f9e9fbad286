#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonCategory {
    Investor,
    Client,
}

impl PersonCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Client => "client",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "investor" => Some(Self::Investor),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    pub fn all() -> &'static [PersonCategory] {
        &[Self::Investor, Self::Client]
    }
}

impl std::fmt::Display for PersonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A counterparty in the people registry. Investors pay the tracked party;
/// clients get paid.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: Option<i64>,
    pub name: String,
    pub category: PersonCategory,
}

impl Person {
    pub fn new(name: String, category: PersonCategory) -> Self {
        Self {
            id: None,
            name,
            category,
        }
    }

    pub fn find_by_name<'a>(people: &'a [Person], name: &str) -> Option<&'a Person> {
        people
            .iter()
            .find(|p| p.name.to_lowercase() == name.to_lowercase())
    }
}
