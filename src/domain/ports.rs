use crate::domain::model::{BundleResult, Document};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// 刪除檔案；檔案不存在時視為成功
    fn delete_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn root_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn excluded_dirs(&self) -> &[String];
    fn manifest_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Document>>;
    async fn transform(&self, documents: Vec<Document>) -> Result<BundleResult>;
    async fn load(&self, result: BundleResult) -> Result<String>;
}
