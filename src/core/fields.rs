//! Form field values and work-item extraction

use std::collections::BTreeMap;
use std::fmt;

use super::error::ValidationError;

/// More work items than this still assemble, the form just warns
pub const SUGGESTED_MAX_WORK_ITEMS: usize = 15;

/// Every input field of the certificate form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    OfficeName,
    ContractorName,
    ContractorAddress,
    ContractId,
    ProjectName,
    ProjectLocation,
    AgreementDate,
    CompletionDate,
    ContractAmount,
    FinalContractAmount,
    AuthorizedSignatory,
    Designation,
}

impl FieldKey {
    pub const ALL: [FieldKey; 12] = [
        FieldKey::OfficeName,
        FieldKey::ContractorName,
        FieldKey::ContractorAddress,
        FieldKey::ContractId,
        FieldKey::ProjectName,
        FieldKey::ProjectLocation,
        FieldKey::AgreementDate,
        FieldKey::CompletionDate,
        FieldKey::ContractAmount,
        FieldKey::FinalContractAmount,
        FieldKey::AuthorizedSignatory,
        FieldKey::Designation,
    ];

    /// Snake-case field name
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::OfficeName => "office_name",
            FieldKey::ContractorName => "contractor_name",
            FieldKey::ContractorAddress => "contractor_address",
            FieldKey::ContractId => "contract_id",
            FieldKey::ProjectName => "project_name",
            FieldKey::ProjectLocation => "project_location",
            FieldKey::AgreementDate => "agreement_date",
            FieldKey::CompletionDate => "completion_date",
            FieldKey::ContractAmount => "contract_amount",
            FieldKey::FinalContractAmount => "final_contract_amount",
            FieldKey::AuthorizedSignatory => "authorized_signatory",
            FieldKey::Designation => "designation",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::OfficeName => "Office Name and district:",
            FieldKey::ContractorName => "Contractor Name/Company Name:",
            FieldKey::ContractorAddress => "Contractor's Address:",
            FieldKey::ContractId => "Contract id:",
            FieldKey::ProjectName => "Project Name:",
            FieldKey::ProjectLocation => "Project Location:",
            FieldKey::AgreementDate => "Contract Agreement Date:",
            FieldKey::CompletionDate => "Work Completion Date:",
            FieldKey::ContractAmount => "Contract Amount:",
            FieldKey::FinalContractAmount => "Final Contract Amount:",
            FieldKey::AuthorizedSignatory => "Authorized Signatory Name:",
            FieldKey::Designation => "Designation:",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FieldKey::OfficeName
                | FieldKey::ContractorName
                | FieldKey::ProjectName
                | FieldKey::ContractId
                | FieldKey::ProjectLocation
                | FieldKey::AuthorizedSignatory
                | FieldKey::Designation
        )
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised field name
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

#[cfg(test)]
impl std::str::FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Snapshot of the form's field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: BTreeMap<FieldKey, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Value of a field; absent fields read as empty
    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Required fields that are absent or whitespace-only, in form order
    pub fn missing_required(&self) -> Vec<FieldKey> {
        FieldKey::ALL
            .into_iter()
            .filter(|key| key.is_required() && self.get(*key).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

#[cfg(test)]
impl FieldSet {
    /// Build from `(field name, value)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, UnknownField>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::new();
        for (name, value) in pairs {
            set.set(name.parse()?, value);
        }
        Ok(set)
    }
}

/// Non-blank, trimmed lines of the work-items text box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkItemList {
    items: Vec<String>,
}

impl WorkItemList {
    pub fn from_text(text: &str) -> Self {
        Self {
            items: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn exceeds_suggested_max(&self) -> bool {
        self.items.len() > SUGGESTED_MAX_WORK_ITEMS
    }
}

#[cfg(test)]
impl WorkItemList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
