use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyRequestDto {
    pub string: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyResponseDto(pub BTreeMap<String, usize>);

impl From<BTreeMap<char, usize>> for FrequencyResponseDto {
    fn from(counts: BTreeMap<char, usize>) -> Self {
        Self(
            counts
                .into_iter()
                .map(|(character, count)| (character.to_string(), count))
                .collect(),
        )
    }
}
