use std::path::PathBuf;

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub doculects: usize,
    pub entries: usize,
}
