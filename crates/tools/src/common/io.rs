//! 入出力ユーティリティ（gzip・標準入出力対応）
//!
//! パスが "-" なら標準入出力、拡張子が `.gz` なら gzip として扱う。

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if is_stdio(path) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path)?;
    if is_gzip(path) {
        return Ok(Box::new(BufReader::new(flate2::read::GzDecoder::new(file))));
    }
    Ok(Box::new(BufReader::new(file)))
}

/// ファイル全体を文字列として読む
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mut text = String::new();
    open_reader(path)
        .and_then(|mut reader| reader.read_to_string(&mut text))
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text)
}

/// 棋譜ファイルから指し手を読む
///
/// 空白・改行区切り。`#` で始まる行はコメント。
pub fn read_moves<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ok(split_moves(&read_text(path)?))
}

pub fn split_moves(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// 出力先。gzip の場合は `close` で終端を書き込む
#[must_use = "call .close() to propagate compression/IO errors"]
pub enum Output {
    Stdout(io::Stdout),
    File(BufWriter<File>),
    Gz(flate2::write::GzEncoder<File>),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(s) => s.write(buf),
            Output::File(f) => f.write(buf),
            Output::Gz(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(s) => s.flush(),
            Output::File(f) => f.flush(),
            Output::Gz(e) => e.flush(),
        }
    }
}

impl Output {
    pub fn close(self) -> io::Result<()> {
        match self {
            Output::Stdout(mut s) => s.flush(),
            Output::File(mut f) => f.flush(),
            Output::Gz(e) => e.finish()?.flush(),
        }
    }
}

pub fn open_output<P: AsRef<Path>>(path: P) -> io::Result<Output> {
    let path = path.as_ref();
    if is_stdio(path) {
        return Ok(Output::Stdout(io::stdout()));
    }
    let file = File::create(path)?;
    if is_gzip(path) {
        return Ok(Output::Gz(flate2::write::GzEncoder::new(file, flate2::Compression::default())));
    }
    Ok(Output::File(BufWriter::new(file)))
}

/// JSON を1つ書き出して閉じる
pub fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut out = open_output(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.close().with_context(|| format!("failed to finish {}", path.display()))?;
    Ok(())
}
