use super::stored_name::StoredName;

/// Descriptor for a file accepted by the upload endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub stored_name: StoredName,
    pub original_name: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Jpeg,
    Png,
    Xlsx,
    Xls,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            "application/vnd.ms-excel" => Some(Self::Xls),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Xls => "application/vnd.ms-excel",
        }
    }
}

impl Document {
    pub fn new(
        stored_name: StoredName,
        original_name: String,
        content_type: ContentType,
        size_bytes: u64,
    ) -> Self {
        Self {
            stored_name,
            original_name,
            content_type,
            size_bytes,
        }
    }
}
