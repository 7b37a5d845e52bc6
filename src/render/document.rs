//! Printable receipt document
//!
//! Produces a self-contained HTML page: embedded styles for an 80mm receipt,
//! the receipt fields, and a script that opens the print dialog on load and
//! closes the window once printing finishes or is cancelled.

use crate::models::Receipt;

/// Options controlling how receipt fields are embedded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape title and note instead of inserting them verbatim
    pub escape_html: bool,
}

/// A rendered receipt ready for a print surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDocument {
    /// Upper-cased id of the receipt the document was rendered from
    pub receipt_no: String,
    /// Window title, `Чек - {title}`
    pub title: String,
    /// Complete HTML markup
    pub html: String,
}

const STYLES: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Roboto+Mono:wght@400;700&display=swap');

    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: 'Roboto Mono', monospace;
      padding: 20mm;
      background: white;
    }

    .receipt {
      max-width: 80mm;
      margin: 0 auto;
      border: 2px dashed #000;
      padding: 10mm;
    }

    .header {
      text-align: center;
      border-bottom: 2px solid #000;
      padding-bottom: 5mm;
      margin-bottom: 5mm;
    }

    .header h1 {
      font-size: 18pt;
      font-weight: 700;
      margin-bottom: 3mm;
      text-transform: uppercase;
    }

    .info {
      margin-bottom: 5mm;
    }

    .info-row {
      display: flex;
      justify-content: space-between;
      margin-bottom: 2mm;
      font-size: 10pt;
    }

    .content {
      border-top: 1px solid #000;
      border-bottom: 1px solid #000;
      padding: 5mm 0;
      margin: 5mm 0;
    }

    .content h2 {
      font-size: 12pt;
      margin-bottom: 3mm;
      font-weight: 700;
    }

    .content p {
      font-size: 10pt;
      line-height: 1.5;
      white-space: pre-wrap;
    }

    .footer {
      text-align: center;
      font-size: 9pt;
      margin-top: 5mm;
    }

    @media print {
      body {
        padding: 0;
      }
      .receipt {
        border: none;
      }
    }
"#;

const PRINT_SCRIPT: &str = r#"
    window.onload = function() {
      window.print();
      window.onafterprint = function() {
        window.close();
      };
    };
"#;

/// Decorative rule framing the footer
pub const SEPARATOR: &str = "════════════════════";

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a receipt into a printable document
pub fn render_document(receipt: &Receipt, options: RenderOptions) -> ReceiptDocument {
    let (title, note) = if options.escape_html {
        (escape_html(&receipt.title), escape_html(&receipt.note))
    } else {
        (receipt.title.clone(), receipt.note.clone())
    };
    let receipt_no = receipt.id.to_uppercase();
    let window_title = format!("Чек - {}", title);

    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>{window_title}</title>
    <style>{STYLES}</style>
  </head>
  <body>
    <div class="receipt">
      <div class="header">
        <h1>📋 ЧЕК</h1>
      </div>

      <div class="info">
        <div class="info-row">
          <span>ДАТА:</span>
          <span>{date}</span>
        </div>
        <div class="info-row">
          <span>ВРЕМЯ:</span>
          <span>{time}</span>
        </div>
        <div class="info-row">
          <span>№:</span>
          <span>{receipt_no}</span>
        </div>
      </div>

      <div class="content">
        <h2>{title}</h2>
        <p>{note}</p>
      </div>

      <div class="footer">
        {SEPARATOR}<br>
        СПАСИБО!<br>
        {SEPARATOR}
      </div>
    </div>
    <script>{PRINT_SCRIPT}</script>
  </body>
</html>
"#,
        date = receipt.date,
        time = receipt.time,
    );

    ReceiptDocument {
        receipt_no,
        title: window_title,
        html,
    }
}
