//! HTML generation for the two views.
//!
//! Markup is emitted with `quick-xml`'s writer, which escapes every text
//! node and attribute value. Void elements are written self-closed.

use std::io::Cursor;

use chrono::NaiveDate;
use croplog_core::{
  crop::Catalog,
  display::{COLUMNS, display_row},
  record::CropRecord,
};
use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::WebError;

type Result<T, E = WebError> = std::result::Result<T, E>;

// ─── Notices ─────────────────────────────────────────────────────────────────

/// A one-line message shown above the view's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  Success(String),
  Info(String),
  Warning(String),
  Error(String),
}

impl Notice {
  fn class(&self) -> &'static str {
    match self {
      Notice::Success(_) => "notice success",
      Notice::Info(_) => "notice info",
      Notice::Warning(_) => "notice warning",
      Notice::Error(_) => "notice error",
    }
  }

  pub fn text(&self) -> &str {
    match self {
      Notice::Success(t) | Notice::Info(t) | Notice::Warning(t) | Notice::Error(t) => t,
    }
  }
}

// ─── Views ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
  Insert,
  Records,
}

impl View {
  const ALL: [View; 2] = [View::Insert, View::Records];

  fn title(self) -> &'static str {
    match self {
      View::Insert => "Insert Data",
      View::Records => "View Database",
    }
  }

  fn href(self) -> &'static str {
    match self {
      View::Insert => "/",
      View::Records => "/records",
    }
  }
}

/// The "Insert Data" view: manual entry form and bulk insert selector.
pub fn insert_page(catalog: &Catalog, today: NaiveDate, notices: &[Notice]) -> Result<String> {
  let mut page = PageBuilder::new(View::Insert)?;
  page.notices(notices)?;
  let today = today.format("%Y-%m-%d").to_string();
  let w = &mut page.writer;

  write_start(w, "section", &[])?;
  write_text_elem(w, "h2", &[], "Insert a New Crop Record")?;
  write_start(w, "form", &[("method", "post"), ("action", "/records")])?;

  labelled_select(w, "Crop Name", "crop_name", catalog.crops().iter().map(|c| c.label()))?;
  labelled_input(w, "Planting Date", &[
    ("type", "date"),
    ("name", "planting_date"),
    ("value", today.as_str()),
    ("required", "required"),
  ])?;
  labelled_input(w, "Harvest Date", &[
    ("type", "date"),
    ("name", "harvest_date"),
    ("value", today.as_str()),
    ("required", "required"),
  ])?;
  labelled_select(
    w,
    "Growth Stage",
    "growth_stage",
    catalog.growth_stages().iter().map(|s| s.label()),
  )?;
  labelled_select(
    w,
    "Pest Control Measures",
    "pest_control_measures",
    catalog.pest_controls().iter().map(|p| p.label()),
  )?;
  labelled_input(w, "Yield Prediction (kg)", &[
    ("type", "number"),
    ("name", "yield_prediction"),
    ("min", "0"),
    ("step", "1"),
    ("value", "0"),
    ("required", "required"),
  ])?;
  write_text_elem(w, "button", &[("type", "submit")], "Insert Record")?;

  write_end(w, "form")?;
  write_end(w, "section")?;

  let bulk_options: Vec<String> = catalog.bulk_options().iter().map(usize::to_string).collect();

  write_start(w, "section", &[])?;
  write_text_elem(w, "h2", &[], "Bulk Insert Crop Records")?;
  write_start(w, "form", &[("method", "post"), ("action", "/bulk")])?;
  labelled_select(
    w,
    "Select number of records to insert",
    "count",
    bulk_options.iter().map(String::as_str),
  )?;
  write_text_elem(w, "button", &[("type", "submit")], "Start Bulk Insert")?;
  write_end(w, "form")?;
  write_end(w, "section")?;

  page.finish()
}

/// The "View Database" view. `shown` is the display window; `total` the
/// number of rows in the table.
pub fn records_page(shown: &[CropRecord], total: usize, notices: &[Notice]) -> Result<String> {
  let mut page = PageBuilder::new(View::Records)?;
  page.notices(notices)?;
  // A failed fetch already explains itself in the notices.
  if shown.is_empty() && notices.is_empty() {
    page.notices(&[Notice::Warning("No records found in database.".into())])?;
  }
  let w = &mut page.writer;

  write_start(w, "section", &[])?;
  write_text_elem(w, "h2", &[], "Current Crop Records")?;

  if !shown.is_empty() {
    write_text_elem(
      w,
      "p",
      &[],
      &format!("Showing the first {} of {total} records.", shown.len()),
    )?;
    write_start(w, "table", &[])?;
    write_start(w, "thead", &[])?;
    write_start(w, "tr", &[])?;
    for column in COLUMNS {
      write_text_elem(w, "th", &[], column)?;
    }
    write_end(w, "tr")?;
    write_end(w, "thead")?;

    write_start(w, "tbody", &[])?;
    for record in shown {
      write_start(w, "tr", &[])?;
      for cell in display_row(record) {
        write_text_elem(w, "td", &[], &cell)?;
      }
      write_end(w, "tr")?;
    }
    write_end(w, "tbody")?;
    write_end(w, "table")?;
  }

  write_start(w, "form", &[("method", "get"), ("action", "/records")])?;
  write_text_elem(w, "button", &[("type", "submit")], "Refresh Data")?;
  write_end(w, "form")?;
  write_end(w, "section")?;

  page.finish()
}

// ─── Page skeleton ───────────────────────────────────────────────────────────

struct PageBuilder {
  writer: Writer<Cursor<Vec<u8>>>,
}

impl PageBuilder {
  /// Doctype, head, title banner and nav bar; leaves `<main>` open.
  fn new(active: View) -> Result<Self> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let w = &mut writer;

    w.write_event(Event::DocType(BytesText::from_escaped("html")))
      .map_err(render_err)?;
    write_start(w, "html", &[("lang", "en")])?;
    write_start(w, "head", &[])?;
    write_empty(w, "meta", &[("charset", "utf-8")])?;
    write_text_elem(w, "title", &[], &format!("{} · Smart Crop Management System", active.title()))?;
    write_end(w, "head")?;

    write_start(w, "body", &[])?;
    write_text_elem(w, "h1", &[], "Smart Crop Management System")?;
    write_start(w, "nav", &[])?;
    for view in View::ALL {
      let mut attrs = vec![("href", view.href())];
      if view == active {
        attrs.push(("aria-current", "page"));
      }
      write_text_elem(w, "a", &attrs, view.title())?;
    }
    write_end(w, "nav")?;
    write_start(w, "main", &[])?;

    Ok(Self { writer })
  }

  fn notices(&mut self, notices: &[Notice]) -> Result<()> {
    for notice in notices {
      write_text_elem(&mut self.writer, "p", &[("class", notice.class())], notice.text())?;
    }
    Ok(())
  }

  fn finish(mut self) -> Result<String> {
    write_end(&mut self.writer, "main")?;
    write_end(&mut self.writer, "body")?;
    write_end(&mut self.writer, "html")?;
    String::from_utf8(self.writer.into_inner().into_inner()).map_err(render_err)
  }
}

// ─── Form helpers ────────────────────────────────────────────────────────────

fn labelled_select<'a>(
  w:       &mut Writer<Cursor<Vec<u8>>>,
  label:   &str,
  name:    &str,
  options: impl Iterator<Item = &'a str>,
) -> Result<()> {
  write_start(w, "label", &[])?;
  write_text(w, label)?;
  write_start(w, "select", &[("name", name)])?;
  for option in options {
    write_text_elem(w, "option", &[("value", option)], option)?;
  }
  write_end(w, "select")?;
  write_end(w, "label")
}

fn labelled_input(
  w:     &mut Writer<Cursor<Vec<u8>>>,
  label: &str,
  attrs: &[(&str, &str)],
) -> Result<()> {
  write_start(w, "label", &[])?;
  write_text(w, label)?;
  write_empty(w, "input", attrs)?;
  write_end(w, "label")
}

// ─── Writer helpers ──────────────────────────────────────────────────────────

fn render_err(e: impl std::fmt::Display) -> WebError { WebError::Render(e.to_string()) }

fn write_start(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
  let start = BytesStart::new(tag).with_attributes(attrs.iter().copied());
  w.write_event(Event::Start(start)).map_err(render_err)
}

fn write_empty(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
  let elem = BytesStart::new(tag).with_attributes(attrs.iter().copied());
  w.write_event(Event::Empty(elem)).map_err(render_err)
}

fn write_end(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str) -> Result<()> {
  w.write_event(Event::End(BytesEnd::new(tag))).map_err(render_err)
}

fn write_text(w: &mut Writer<Cursor<Vec<u8>>>, text: &str) -> Result<()> {
  w.write_event(Event::Text(BytesText::new(text))).map_err(render_err)
}

fn write_text_elem(
  w:     &mut Writer<Cursor<Vec<u8>>>,
  tag:   &str,
  attrs: &[(&str, &str)],
  text:  &str,
) -> Result<()> {
  write_start(w, tag, attrs)?;
  write_text(w, text)?;
  write_end(w, tag)
}

#[cfg(test)]
mod tests {
  use croplog_core::crop::{CropName, GrowthStage, PestControl};

  use super::*;

  fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, 14).unwrap() }

  #[test]
  fn insert_page_lists_every_option() {
    let html = insert_page(&Catalog::standard(), today(), &[]).unwrap();
    assert!(html.starts_with("<!DOCTYPE"));
    assert!(html.contains(r#"<option value="Sugarcane">Sugarcane</option>"#));
    assert!(html.contains(r#"<option value="Maturity">Maturity</option>"#));
    assert!(html.contains(r#"<option value="Regular field monitoring">"#));
    assert!(html.contains(r#"<option value="100000">100000</option>"#));
    assert!(html.contains(r#"value="2026-10-14""#));
  }

  #[test]
  fn notice_text_is_escaped() {
    let notices = [Notice::Error("bad <input> & \"quotes\"".into())];
    let html = insert_page(&Catalog::standard(), today(), &notices).unwrap();
    assert!(html.contains("bad &lt;input&gt; &amp;"));
    assert!(!html.contains("bad <input>"));
  }

  #[test]
  fn empty_table_shows_warning() {
    let html = records_page(&[], 0, &[]).unwrap();
    assert!(html.contains("No records found in database."));
    assert!(!html.contains("<table>"));
  }

  #[test]
  fn table_has_header_and_one_row_per_record() {
    let record = CropRecord {
      id:                    1,
      crop_name:             CropName::Wheat,
      planting_date:         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
      harvest_date:          NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
      growth_stage:          GrowthStage::Seedling,
      pest_control_measures: PestControl::CropRotation,
      yield_prediction:      1200,
    };
    let html = records_page(&[record], 1, &[]).unwrap();
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<th>Crop Name</th>"));
    assert!(html.contains("<td>Crop rotation</td>"));
    assert!(html.contains("<td>1200</td>"));
    assert!(html.contains(r#"<a href="/records" aria-current="page">View Database</a>"#));
  }
}
