use crate::core::grouper::AnagramGrouper;
use crate::core::{ConfigProvider, GroupingResult, Pipeline, Storage};
use crate::domain::model::{GroupingReport, OutputFormat};
use crate::utils::error::{GrouperError, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const SAMPLE_WORDS: [&str; 6] = ["eat", "tea", "tan", "ate", "nat", "bat"];

pub const ARCHIVE_NAME: &str = "groups.zip";

pub struct GroupingPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) source: S,
    pub(crate) sink: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> GroupingPipeline<S, C> {
    /// `source` resolves input files, `sink` receives the rendered outputs.
    pub fn new(source: S, sink: S, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    fn grouper(&self) -> AnagramGrouper {
        AnagramGrouper::with_order(self.config.group_order())
    }
}

/// 依副檔名解析輸入檔：`.json` 為字串陣列，`.csv` 取每列第一欄，其餘以空白切分
pub fn parse_words(name: &str, data: &[u8]) -> Result<Vec<String>> {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => serde_json::from_slice::<Vec<String>>(data).map_err(|e| {
            GrouperError::InputError {
                source_name: name.to_string(),
                message: format!("expected a JSON array of strings: {}", e),
            }
        }),
        Some("csv") => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(csv::Trim::All)
                .from_reader(data);

            let mut words = Vec::new();
            for record in reader.records() {
                let record = record.map_err(|e| GrouperError::InputError {
                    source_name: name.to_string(),
                    message: format!("invalid CSV: {}", e),
                })?;
                if let Some(first) = record.get(0) {
                    words.push(first.to_string());
                }
            }
            Ok(words)
        }
        _ => {
            let text = std::str::from_utf8(data).map_err(|e| GrouperError::InputError {
                source_name: name.to_string(),
                message: format!("not valid UTF-8: {}", e),
            })?;
            Ok(text.split_whitespace().map(str::to_string).collect())
        }
    }
}

/// Drops repeated formats (e.g. `text` and `txt`), keeping the first occurrence.
pub fn unique_formats(formats: Vec<OutputFormat>) -> Vec<OutputFormat> {
    let mut seen = HashSet::new();
    formats.into_iter().filter(|f| seen.insert(*f)).collect()
}

/// 將分組結果轉成指定格式的內容
pub fn render(result: &GroupingResult, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => {
            let mut text = String::new();
            for group in &result.groups {
                text.push_str(&group.members.join(", "));
                text.push('\n');
            }
            Ok(text.into_bytes())
        }
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(&GroupingReport::from(result))?),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Tsv { b'\t' } else { b',' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(Vec::new());

            // 每個成員一列，避免含空白的單字被拼接後無法還原
            writer.write_record(["group", "key", "member"])?;
            for (index, group) in result.groups.iter().enumerate() {
                let index = index.to_string();
                for member in &group.members {
                    writer.write_record([index.as_str(), group.key.as_str(), member.as_str()])?;
                }
            }

            writer
                .into_inner()
                .map_err(|e| GrouperError::IoError(e.into_error()))
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GroupingPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let mut words = self.config.words().to_vec();

        for file in self.config.input_files() {
            tracing::debug!("Reading words from: {}", file);
            let data = self
                .source
                .read_file(file)
                .await
                .map_err(|e| GrouperError::InputError {
                    source_name: file.clone(),
                    message: e.to_string(),
                })?;

            let parsed = parse_words(file, &data)?;
            tracing::debug!("Read {} words from {}", parsed.len(), file);
            words.extend(parsed);
        }

        // 沒有任何輸入來源時使用範例資料
        if words.is_empty() && self.config.input_files().is_empty() {
            tracing::warn!("No input words configured, using sample data");
            words = SAMPLE_WORDS.iter().map(|w| w.to_string()).collect();
        }

        Ok(words)
    }

    async fn transform(&self, words: Vec<String>) -> Result<GroupingResult> {
        let grouper = self.grouper();
        tracing::debug!("Grouping {} words ({:?} order)", words.len(), grouper.order());

        let groups = grouper.group_keyed(&words);

        Ok(GroupingResult {
            groups,
            total_words: words.len(),
        })
    }

    async fn load(&self, result: GroupingResult) -> Result<String> {
        let formats = unique_formats(self.config.output_formats());
        let base = self.config.output_path();

        let mut rendered = Vec::with_capacity(formats.len());
        for format in formats {
            rendered.push((format.file_name(), render(&result, format)?));
        }

        if self.config.compress() {
            tracing::debug!("Creating ZIP file with {} files", rendered.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, data) in &rendered {
                    zip.start_file(name.as_str(), SimpleFileOptions::default())?;
                    zip.write_all(data)?;
                }
                zip.finish()?.into_inner()
            };

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.sink.write_file(ARCHIVE_NAME, &zip_data).await?;
            return Ok(format!("{}/{}", base, ARCHIVE_NAME));
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (name, data) in &rendered {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.sink.write_file(name, data).await?;
            written.push(format!("{}/{}", base, name));
        }

        Ok(written.join(", "))
    }
}
