pub mod args;

use anyhow::{Context, Result};
use docrank_core::{
    paginate, remove_duplicates, DocId, DocumentStatus, Rating, RequestQueue, SearchServer,
};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

pub use args::{Cli, Commands, IndexArgs};

/// One input record, from a JSON array/object or a JSONL line.
#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

/// JSON and JSONL files under `input`, or `input` itself if it is a file.
pub fn collect_input_files(input: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

pub fn load_documents(input: &Path) -> Result<Vec<InputDoc>> {
    let mut docs = Vec::new();
    for file in collect_input_files(input) {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, &mut docs)?;
        } else {
            load_json(&file, &mut docs)?;
        }
    }
    Ok(docs)
}

fn load_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}", file.display(), line_no + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => {}
    }
    Ok(())
}

/// Build a server from the stop words and documents named by `args`.
pub fn build_server(args: &IndexArgs) -> Result<SearchServer> {
    let started = Instant::now();
    let docs = load_documents(&args.input)?;
    let mut server = SearchServer::with_stop_words_text(&args.stop_words)?;
    for doc in &docs {
        server
            .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
            .with_context(|| format!("adding document {}", doc.id))?;
    }
    tracing::info!(
        num_docs = server.document_count(),
        took_s = started.elapsed().as_secs_f64(),
        "index built"
    );
    Ok(server)
}

/// Execute a parsed command, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Search { index, query, status, page_size, dedup, json } => {
            let mut server = build_server(&index)?;
            if dedup {
                remove_duplicates(&mut server);
            }
            let started = Instant::now();
            let found = server.find_top_documents_by_status(&query, status)?;
            tracing::info!(query = %query, results = found.len(), took_s = started.elapsed().as_secs_f64(), "search complete");
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
                return Ok(());
            }
            for (n, page) in paginate(&found, page_size).pages().enumerate() {
                writeln!(out, "Page {}", n + 1)?;
                for doc in page {
                    writeln!(out, "{doc}")?;
                }
            }
        }
        Commands::Match { index, query, id } => {
            let server = build_server(&index)?;
            let (words, status) = server.match_document(&query, id)?;
            writeln!(out, "{{ document_id = {id}, status = {status}, words = [{}] }}", words.join(" "))?;
        }
        Commands::Dedup { index } => {
            let mut server = build_server(&index)?;
            writeln!(out, "Before duplicates removed: {}", server.document_count())?;
            for id in remove_duplicates(&mut server) {
                writeln!(out, "Found duplicate document id {id}")?;
            }
            writeln!(out, "After duplicates removed: {}", server.document_count())?;
        }
        Commands::History { index, queries, status } => {
            let server = build_server(&index)?;
            let text = fs::read_to_string(&queries)
                .with_context(|| format!("reading {}", queries.display()))?;
            let mut queue = RequestQueue::new(&server);
            for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                let found = queue.add_find_request_by_status(line, status)?;
                writeln!(out, "{line}: {} result(s)", found.len())?;
            }
            writeln!(out, "Requests without results: {}", queue.no_result_requests())?;
        }
    }
    Ok(())
}
