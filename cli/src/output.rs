// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Output
//!
//! Renders relayed backend documents either as raw JSON or as coloured
//! cards. Cards decode the typed entity views; anything that fails to
//! decode falls back to pretty-printed JSON so no data is hidden.
//!
//! # Architecture
//!
//! - **Layer:** Interface / Presentation Layer
//! - **Purpose:** Implements card and JSON rendering for operator commands

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::{Color, ColoredString, Colorize};
use serde::de::DeserializeOwned;
use serde_json::Value;

use toolkit_core::domain::entities::{
    Brand, BrandCompass, Generation, JobStatus, Prompt, Source, Tenant, Worker,
};

const PROGRESS_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Human-readable cards
    #[default]
    Card,
    /// Relayed JSON, unchanged
    Json,
}

/// Print one document, or a list of documents, in the selected mode.
pub fn print_value<T, F>(value: &Value, mode: OutputMode, card: F)
where
    T: DeserializeOwned,
    F: Fn(&T),
{
    if mode == OutputMode::Json {
        let mut redacted = value.clone();
        redact_secrets(&mut redacted);
        print_json(&redacted);
        return;
    }

    match value {
        Value::Array(items) if items.is_empty() => {
            println!("{}", "No results".yellow());
        }
        Value::Array(items) => {
            println!("{} found:", items.len());
            for item in items {
                println!();
                print_card(item, &card);
            }
        }
        other => print_card(other, &card),
    }
}

fn print_card<T, F>(value: &Value, card: &F)
where
    T: DeserializeOwned,
    F: Fn(&T),
{
    match serde_json::from_value::<T>(value.clone()) {
        Ok(entity) => card(&entity),
        Err(e) => {
            tracing::debug!("Falling back to JSON view: {}", e);
            print_json(value);
        }
    }
}

/// Credential-like keys are never shown, whatever the output mode.
pub fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key == "apikey" || key.ends_with("api_key") || key.ends_with("_secret") || key == "secret"
}

pub fn redact_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !is_secret_key(key));
            for nested in map.values_mut() {
                redact_secrets(nested);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_secrets),
        _ => {}
    }
}

pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<14} {}", format!("{}:", label).dimmed(), value);
}

fn optional(label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        field(label, value);
    }
}

fn timestamp(label: &str, value: Option<&DateTime<Utc>>) {
    if let Some(ts) = value {
        field(label, ts.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}

fn settings(value: &std::collections::HashMap<String, Value>) {
    if value.is_empty() {
        return;
    }
    println!("  {}", "Settings:".dimmed());
    let mut keys: Vec<_> = value.keys().filter(|k| !is_secret_key(k)).collect();
    keys.sort();
    for key in keys {
        let mut shown = value[key].clone();
        redact_secrets(&mut shown);
        println!("    {} = {}", key, shown);
    }
}

pub fn status_color(status: JobStatus) -> Color {
    match status {
        JobStatus::Completed => Color::Green,
        JobStatus::Processing => Color::Blue,
        JobStatus::Pending => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn status_badge(status: JobStatus) -> ColoredString {
    format!(" {} ", status.as_str()).color(status_color(status)).bold()
}

/// Fixed-width bar for a completion percentage; out-of-range values clamp.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let ratio = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn tenant_card(tenant: &Tenant) {
    println!("{} {}", "Tenant".bold(), tenant.tenant_id.cyan());
    optional("Name", tenant.name.as_deref());
    optional("Description", tenant.description.as_deref());
    if !tenant.concurrency_limits.is_empty() {
        println!("  {}", "Concurrency limits:".dimmed());
        let mut limits: Vec<_> = tenant.concurrency_limits.iter().collect();
        limits.sort();
        for (kind, limit) in limits {
            println!("    {:<10} {}", kind, limit);
        }
    }
    settings(&tenant.settings);
}

pub fn brand_card(brand: &Brand) {
    println!("{} {}", "Brand".bold(), brand.brand_id.cyan());
    optional("Name", brand.name.as_deref());
    optional("Description", brand.description.as_deref());
    settings(&brand.settings);
}

pub fn source_card(source: &Source) {
    print!("{} {}", "Source".bold(), source.source_id.cyan());
    match source.status {
        Some(status) => println!("  {}", status_badge(status)),
        None => println!(),
    }
    optional("Name", source.name.as_deref());
    optional("Description", source.description.as_deref());
    if let Some(kind) = source.source_type {
        field("Type", format!("{:?}", kind).to_uppercase());
    }
    if let Some(content) = source.content_type {
        field("Content", content.as_str());
    }
    optional("URL", source.url.as_deref());
    if let Some(text) = source.text.as_deref().filter(|t| !t.is_empty()) {
        println!("  {}", "Text:".dimmed());
        print_markdown(text, 4);
    }
    if let Some(analysis) = &source.analysis_results {
        println!("  {}", "Analysis:".dimmed());
        print_json(analysis);
    }
}

pub fn prompt_card(prompt: &Prompt) {
    println!("{} {}", "Prompt".bold(), prompt.prompt_id.cyan());
    optional("Name", prompt.name.as_deref());
    optional("Description", prompt.description.as_deref());
    if let Some(content) = prompt.content_type {
        field("Content", content.as_str());
    }
    optional("Status", prompt.status.as_deref());
    if let Some(text) = prompt.prompt_text.as_deref().filter(|t| !t.is_empty()) {
        println!("  {}", "Text:".dimmed());
        print_markdown(text, 4);
    }
    settings(&prompt.settings);
}

pub fn worker_card(worker: &Worker) {
    println!("{} {}", "Worker".bold(), worker.worker_id.cyan());
    optional("Name", worker.name.as_deref());
    optional("Description", worker.description.as_deref());
    if let Some(output) = worker.output_type {
        field("Output", output.as_str());
    }
    if let Some(prompt) = worker.prompt.as_deref().filter(|t| !t.is_empty()) {
        println!("  {}", "Prompt:".dimmed());
        print_markdown(prompt, 4);
    }
    settings(&worker.settings);
}

pub fn generation_card(generation: &Generation) {
    print!("{} {}", "Generation".bold(), generation.generation_id.cyan());
    match generation.status {
        Some(status) => println!("  {}", status_badge(status)),
        None => println!(),
    }
    optional("Worker", generation.worker_id.as_deref());
    optional("Context", generation.context.as_deref());
    if let Some(result) = &generation.result {
        if let Some(content) = result.content.as_deref() {
            println!("  {}", "Result:".purple().bold());
            print_markdown(content, 4);
        }
        if let Some(model) = result.metadata.as_ref().and_then(|m| m.model.as_deref()) {
            field("Model", model);
        }
    }
    timestamp("Created", generation.created_at.as_ref());
    timestamp("Updated", generation.updated_at.as_ref());
}

pub fn compass_card(compass: &BrandCompass) {
    println!("{}  {}", "Brand Compass".bold(), status_badge(compass.status));
    timestamp("Triggered", compass.triggered_at.as_ref());
    timestamp("Completed", compass.completed_at.as_ref());

    if compass.status == JobStatus::Processing {
        let progress = &compass.progress;
        println!(
            "  {} {:.0}%  ({} / {} workers)",
            progress_bar(progress.percent_complete, PROGRESS_WIDTH).blue(),
            progress.percent_complete,
            progress.completed_workers,
            progress.total_workers
        );
    }

    if !compass.generations.is_empty() {
        println!("  {}", "Generations:".dimmed());
        print_json(&Value::Array(compass.generations.clone()));
    }
}

/// One line of generated text after cosmetic markdown classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownLine {
    Blank,
    Heading(String),
    Bullet(Vec<Span>),
    Text(Vec<Span>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

pub fn classify_line(line: &str) -> MarkdownLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return MarkdownLine::Blank;
    }

    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes > 0 && hashes <= 6 {
        let rest = &trimmed[hashes..];
        if rest.starts_with(' ') {
            return MarkdownLine::Heading(rest.trim().to_string());
        }
    }

    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return MarkdownLine::Bullet(spans(item.trim_start()));
    }

    MarkdownLine::Text(spans(trimmed))
}

/// Split on `**` pairs. An unmatched opener is kept as literal text.
pub fn spans(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            out.push(Span::Plain(rest[..start].to_string()));
        }
        out.push(Span::Bold(after[..end].to_string()));
        rest = &after[end + 2..];
    }

    if !rest.is_empty() {
        out.push(Span::Plain(rest.to_string()));
    }
    out
}

fn paint(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => text.normal().to_string(),
            Span::Bold(text) => text.bold().to_string(),
        })
        .collect()
}

pub fn print_markdown(text: &str, indent: usize) {
    let pad = " ".repeat(indent);
    for line in text.lines() {
        match classify_line(line) {
            MarkdownLine::Blank => println!(),
            MarkdownLine::Heading(title) => println!("{}{}", pad, title.bold().underline()),
            MarkdownLine::Bullet(item) => println!("{}  • {}", pad, paint(&item)),
            MarkdownLine::Text(text) => println!("{}{}", pad, paint(&text)),
        }
    }
}
