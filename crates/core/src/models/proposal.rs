//! Free-form proposals (song requests, surprises) mailed to the couple.

use serde::Deserialize;

use crate::messages::MSG_PROPOSAL_MISSING_FIELDS;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProposalRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub name: String,
    pub email: String,
    pub content: String,
}

impl ProposalRequest {
    pub fn validated(self) -> Result<Proposal, String> {
        let name = self.name.filter(|v| !v.trim().is_empty());
        let email = self.email.filter(|v| !v.trim().is_empty());
        let content = self.content.filter(|v| !v.trim().is_empty());
        let (Some(name), Some(email), Some(content)) = (name, email, content) else {
            return Err(MSG_PROPOSAL_MISSING_FIELDS.to_string());
        };
        Ok(Proposal { name, email, content })
    }
}
