use serde::{Deserialize, Serialize};

/// 單一 markdown 檔案，路徑為相對於掃描根目錄的路徑
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleManifest {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub file_count: usize,
    pub files: Vec<ManifestEntry>,
}

#[derive(Debug, Clone)]
pub struct BundleResult {
    pub entries: Vec<ManifestEntry>,
    pub bundle: String,
    pub manifest: Option<String>,
}
