//! HTML writer for ringkas.
//!
//! Emits a segmented answer as HTML fragments: `<h2>` headings, `<p>`
//! paragraphs, `<ul>`/`<ol>` lists. Section text is cleaned at render time
//! unless [`EmitOptions::raw_markup`] is set.

use std::borrow::Cow;

use ringkas_core::{Answer, ConversionResult, EmitError, EmitOptions, Emitter, Section};
use ringkas_transforms::{clean, raw_fallback};

/// Emit an answer as HTML.
pub fn emit(answer: &Answer) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    emit_with_options(answer, &EmitOptions::default())
}

/// Emit an answer as HTML with custom options.
pub fn emit_with_options(
    answer: &Answer,
    options: &EmitOptions,
) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    let mut ctx = EmitContext::new(options);
    emit_answer(answer, &mut ctx);
    Ok(ConversionResult::ok(ctx.output.into_bytes()))
}

/// Emit an answer as a complete HTML document with doctype.
pub fn emit_full_document(
    answer: &Answer,
    options: &EmitOptions,
) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    let mut ctx = EmitContext::new(options);

    ctx.write("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n");
    emit_answer(answer, &mut ctx);
    if !ctx.output.ends_with('\n') {
        ctx.write("\n");
    }
    ctx.write("</body>\n</html>\n");

    Ok(ConversionResult::ok(ctx.output.into_bytes()))
}

/// [`Emitter`] implementation for use behind a trait object.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEmitter {
    /// Wrap output in a full HTML page.
    pub full_document: bool,
}

impl Emitter for HtmlEmitter {
    fn formats(&self) -> &[&str] {
        &["html"]
    }

    fn emit(
        &self,
        answer: &Answer,
        options: &EmitOptions,
    ) -> Result<ConversionResult<Vec<u8>>, EmitError> {
        if self.full_document {
            emit_full_document(answer, options)
        } else {
            emit_with_options(answer, options)
        }
    }
}

/// Emit context for tracking state during emission.
struct EmitContext<'a> {
    output: String,
    options: &'a EmitOptions,
}

impl<'a> EmitContext<'a> {
    fn new(options: &'a EmitOptions) -> Self {
        Self {
            output: String::new(),
            options,
        }
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Section text as it should be displayed.
    fn display<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.raw_markup {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(clean(text))
        }
    }

    fn end_block(&mut self) {
        if self.options.pretty {
            self.write("\n");
        }
    }
}

fn emit_answer(answer: &Answer, ctx: &mut EmitContext) {
    if answer.is_unstructured() {
        emit_fallback(&answer.normalized, ctx);
        return;
    }
    for section in &answer.sections {
        emit_section(section, ctx);
    }
}

/// Emit a single section.
fn emit_section(section: &Section, ctx: &mut EmitContext) {
    match section {
        Section::Heading { content, level } => {
            let tag = format!("h{level}");
            emit_text_tag(&tag, content, ctx);
        }
        Section::Paragraph { content } => emit_text_tag("p", content, ctx),
        Section::List { items } => emit_list("ul", items, ctx),
        Section::NumberedList { items } => emit_list("ol", items, ctx),
    }
    ctx.end_block();
}

fn emit_text_tag(tag: &str, text: &str, ctx: &mut EmitContext) {
    let text = escape_html(&ctx.display(text));
    ctx.write("<");
    ctx.write(tag);
    ctx.write(">");
    ctx.write(&text);
    ctx.write("</");
    ctx.write(tag);
    ctx.write(">");
}

fn emit_list(tag: &str, items: &[String], ctx: &mut EmitContext) {
    ctx.write("<");
    ctx.write(tag);
    ctx.write(">");
    for item in items {
        if ctx.options.pretty {
            ctx.write("\n  ");
        }
        emit_text_tag("li", item, ctx);
    }
    if ctx.options.pretty {
        ctx.write("\n");
    }
    ctx.write("</");
    ctx.write(tag);
    ctx.write(">");
}

/// Emit the line-preserving fallback for answers with no sections.
fn emit_fallback(normalized: &str, ctx: &mut EmitContext) {
    let text = raw_fallback(normalized);
    if text.is_empty() {
        return;
    }
    tracing::trace!(lines = text.lines().count(), "emitting raw fallback");

    ctx.write("<p class=\"raw\">");
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            ctx.write("<br>");
        }
        ctx.write(&escape_html(line));
    }
    ctx.write("</p>");
    ctx.end_block();
}

/// Escape HTML special characters in text content.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
