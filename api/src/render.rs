use gateway::catalog;

const TITLE: &str = "House Rent Prediction";

/// Renders the prediction page, with the outcome of the last request if any.
///
/// The failure text is escaped before being embedded.
pub fn page(outcome: Option<Result<f64, String>>) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(&format!("  <title>{TITLE}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("  <h1>{TITLE}</h1>\n"));

    html.push_str("  <form action=\"/predict/page\" method=\"post\">\n");
    html.push_str(
        "    <label>BHK <input type=\"number\" name=\"BHK\" min=\"1\" max=\"10\" value=\"2\"></label>\n",
    );
    html.push_str("    <label>Main Locality <select name=\"Main_Locality\">\n");
    for locality in catalog::LOCALITIES {
        html.push_str(&format!(
            "      <option value=\"{0}\">{0}</option>\n",
            escape(locality)
        ));
    }
    html.push_str("    </select></label>\n");
    html.push_str(
        "    <label>Square Feet <input type=\"number\" name=\"Sqft\" min=\"100\" max=\"10000\" step=\"any\" value=\"1000\"></label>\n",
    );
    html.push_str("    <button type=\"submit\">Predict Rent</button>\n");
    html.push_str("  </form>\n");

    match outcome {
        Some(Ok(value)) => html.push_str(&format!(
            "  <p class=\"prediction\">Predicted Rent: ₹{value:.2}</p>\n"
        )),
        Some(Err(e)) => html.push_str(&format!(
            "  <p class=\"error\">Error: {}</p>\n",
            escape(&e)
        )),
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
