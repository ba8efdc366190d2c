/// Generates a synthetic page with `cards` project cards, each carrying a
/// badge list, for parser and resolver benchmarks.
pub fn generate_page(cards: usize) -> String {
    let mut page = String::from("<!DOCTYPE html><html><body><section id=\"ai\">\n");
    for i in 0..cards {
        page.push_str("<div class=\"project-card\">\n");
        page.push_str(&format!(
            "<h3 class=\"project-card__title\">Project {i}</h3>\n"
        ));
        page.push_str("<div class=\"project-card__tech\">\n");
        for badge in ["OpenAI API", "Anthropic Claude", "Google Gemini", "Ollama", "Python"] {
            page.push_str(&format!(
                "<span class=\"project-card__tech-badge\">{badge}</span>\n"
            ));
        }
        page.push_str("</div>\n</div>\n");
    }
    page.push_str("</section></body></html>\n");
    page
}
