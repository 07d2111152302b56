use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EncodingType {
    #[default]
    Unspecified,
    Proto3,
    Json,
}

/// Opaque serialized payload, as stored by the backends
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataBlob {
    pub encoding: EncodingType,
    pub data: Vec<u8>,
}

impl DataBlob {
    pub fn new(encoding: EncodingType, data: impl Into<Vec<u8>>) -> Self {
        Self {
            encoding,
            data: data.into(),
        }
    }

    pub fn proto3(data: impl Into<Vec<u8>>) -> Self {
        Self::new(EncodingType::Proto3, data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
