use crate::core::{
    BundleManifest, BundleResult, ConfigProvider, Document, ManifestEntry, Pipeline, Storage,
};
use crate::utils::error::{BundleError, Result};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

pub const MANIFEST_FILE: &str = "bundle_manifest.json";

pub struct SimplePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SimplePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Document>> {
        // 掃描前先刪除舊的輸出檔，重跑時才不會把自己串進輸出裡
        tracing::debug!("Removing previous output file: {}", self.config.output_file());
        self.storage.delete_file(self.config.output_file()).await?;

        let root = Path::new(self.config.root_path());
        let excluded: HashSet<&str> = self
            .config
            .excluded_dirs()
            .iter()
            .map(String::as_str)
            .collect();

        tracing::debug!("Scanning {} (excluding {:?})", root.display(), excluded);

        let mut paths = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                // 只比對目錄「名稱」，不看完整路徑；掃描根目錄本身永不剪枝
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && e.file_name()
                            .to_str()
                            .is_some_and(|name| excluded.contains(name)))
            })
        {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "md")
            {
                let rel = entry.path().strip_prefix(root).map_err(|_| {
                    BundleError::ProcessingError {
                        message: format!(
                            "File {} is outside the scan root {}",
                            entry.path().display(),
                            root.display()
                        ),
                    }
                })?;
                paths.push(rel.to_string_lossy().into_owned());
            }
        }

        // 排序套用在攤平後的路徑清單上，輸出順序與檔案系統走訪順序無關
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = self.storage.read_file(&path).await?;
            let content = String::from_utf8_lossy(&bytes).into_owned();
            documents.push(Document { path, content });
        }

        Ok(documents)
    }

    async fn transform(&self, documents: Vec<Document>) -> Result<BundleResult> {
        let mut bundle = String::new();
        let mut entries = Vec::with_capacity(documents.len());

        for doc in &documents {
            println!("Appending {}...", doc.path);
            tracing::debug!("Appending {} ({} bytes)", doc.path, doc.content.len());

            bundle.push_str(&format!("### File: {}\n\n", doc.path));
            bundle.push_str(&doc.content);
            bundle.push_str("\n\n");

            entries.push(ManifestEntry {
                path: doc.path.clone(),
                bytes: doc.content.len(),
            });
        }

        let manifest = if self.config.manifest_enabled() {
            let manifest = BundleManifest {
                generated_at: chrono::Utc::now(),
                file_count: entries.len(),
                files: entries.clone(),
            };
            Some(serde_json::to_string_pretty(&manifest)?)
        } else {
            None
        };

        Ok(BundleResult {
            entries,
            bundle,
            manifest,
        })
    }

    async fn load(&self, result: BundleResult) -> Result<String> {
        let output_path = format!("{}/{}", self.config.root_path(), self.config.output_file());

        tracing::debug!(
            "Writing bundle ({} bytes, {} files) to storage",
            result.bundle.len(),
            result.entries.len()
        );
        self.storage
            .write_file(self.config.output_file(), result.bundle.as_bytes())
            .await?;

        if let Some(manifest) = &result.manifest {
            tracing::debug!("Writing manifest ({} bytes)", manifest.len());
            self.storage
                .write_file(MANIFEST_FILE, manifest.as_bytes())
                .await?;
        }

        tracing::debug!("Bundle saved successfully");
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                BundleError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn delete_file(&self, path: &str) -> Result<()> {
            let mut files = self.files.lock().await;
            files.remove(path);
            Ok(())
        }
    }

    #[derive(Clone)]
    struct TestConfig {
        manifest: bool,
    }

    impl ConfigProvider for TestConfig {
        fn root_path(&self) -> &str {
            "."
        }

        fn output_file(&self) -> &str {
            "documentation.md"
        }

        fn excluded_dirs(&self) -> &[String] {
            &[]
        }

        fn manifest_enabled(&self) -> bool {
            self.manifest
        }
    }

    fn doc(path: &str, content: &str) -> Document {
        Document {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_transform_block_layout() {
        let pipeline = SimplePipeline::new(MockStorage::new(), TestConfig { manifest: false });

        let result = pipeline
            .transform(vec![doc("a.md", "alpha\n"), doc("b.md", "beta\n")])
            .await
            .unwrap();

        assert_eq!(
            result.bundle,
            "### File: a.md\n\nalpha\n\n\n### File: b.md\n\nbeta\n\n\n"
        );
        assert_eq!(result.entries.len(), 2);
        assert!(result.manifest.is_none());
    }

    #[tokio::test]
    async fn test_transform_manifest_lists_files_in_order() {
        let pipeline = SimplePipeline::new(MockStorage::new(), TestConfig { manifest: true });

        let result = pipeline
            .transform(vec![doc("a.md", "alpha"), doc("c/a.md", "nested")])
            .await
            .unwrap();

        let manifest: BundleManifest =
            serde_json::from_str(result.manifest.as_deref().unwrap()).unwrap();
        assert_eq!(manifest.file_count, 2);
        assert_eq!(manifest.files[0].path, "a.md");
        assert_eq!(manifest.files[0].bytes, 5);
        assert_eq!(manifest.files[1].path, "c/a.md");
    }

    #[tokio::test]
    async fn test_transform_empty_input_produces_empty_bundle() {
        let pipeline = SimplePipeline::new(MockStorage::new(), TestConfig { manifest: false });

        let result = pipeline.transform(vec![]).await.unwrap();
        assert!(result.bundle.is_empty());
        assert!(result.entries.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_bundle_and_manifest() {
        let storage = MockStorage::new();
        let pipeline = SimplePipeline::new(storage.clone(), TestConfig { manifest: true });

        let result = pipeline
            .transform(vec![doc("a.md", "alpha\n")])
            .await
            .unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "./documentation.md");
        let bundle = storage.get_file("documentation.md").await.unwrap();
        assert!(String::from_utf8_lossy(&bundle).starts_with("### File: a.md"));
        assert!(storage.get_file(MANIFEST_FILE).await.is_some());
    }
}
