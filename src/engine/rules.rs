//! Built-in rule catalog for the scraper-backed engine.
//!
//! Rule ids, impacts, and help strings follow the axe-core naming so that
//! configuration overrides and fix-message tables written against the
//! upstream catalog keep working.

use super::{contrast, Document, Impact, Scope, ViolationNode};
use scraper::{ElementRef, Selector};
use std::collections::HashSet;

/// A single accessibility rule evaluated against a document.
pub trait Rule {
    fn id(&self) -> &'static str;
    fn tags(&self) -> &'static [&'static str];
    fn impact(&self) -> Impact;
    fn help(&self) -> &'static str;
    fn enabled_by_default(&self) -> bool {
        true
    }
    /// Report every node violating this rule.
    fn check(&self, document: &Document) -> Vec<ViolationNode>;
}

/// All built-in rules, in evaluation order.
pub fn catalog() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ImageAlt),
        Box::new(ButtonName),
        Box::new(LinkName),
        Box::new(Label),
        Box::new(HtmlHasLang),
        Box::new(DocumentTitle),
        Box::new(DuplicateId),
        Box::new(EmptyHeading),
        Box::new(LandmarkOneMain),
        Box::new(Region),
        Box::new(ColorContrast),
    ]
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Serialized opening tag, for violations whose subject is a container.
fn opening_tag(el: ElementRef<'_>) -> String {
    let v = el.value();
    let attrs: String = v
        .attrs()
        .map(|(k, val)| format!(" {}=\"{}\"", k, val))
        .collect();
    format!("<{}{}>", v.name(), attrs)
}

fn node(el: ElementRef<'_>) -> ViolationNode {
    ViolationNode { html: el.html() }
}

fn has_text(el: ElementRef<'_>) -> bool {
    el.text().any(|t| !t.trim().is_empty())
}

fn attr_non_empty(el: ElementRef<'_>, name: &str) -> bool {
    el.value().attr(name).is_some_and(|v| !v.trim().is_empty())
}

/// Text content, aria labelling, a title, or a captioned image child all
/// give a control a discernible name.
fn has_accessible_name(el: ElementRef<'_>) -> bool {
    if has_text(el) {
        return true;
    }
    if ["aria-label", "aria-labelledby", "title"]
        .iter()
        .any(|a| attr_non_empty(el, a))
    {
        return true;
    }
    let img = selector("img[alt]");
    el.select(&img).any(|i| attr_non_empty(i, "alt"))
}

fn inside_label(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == "label")
}

struct ImageAlt;

impl Rule for ImageAlt {
    fn id(&self) -> &'static str {
        "image-alt"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Critical
    }
    fn help(&self) -> &'static str {
        "Images must have alternate text"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let img = selector("img");
        document
            .analysis_root()
            .select(&img)
            .filter(|el| {
                // alt="" is a valid marker for decorative images
                el.value().attr("alt").is_none()
                    && !attr_non_empty(*el, "aria-label")
                    && !attr_non_empty(*el, "aria-labelledby")
                    && el.value().attr("role") != Some("presentation")
            })
            .map(node)
            .collect()
    }
}

struct ButtonName;

impl Rule for ButtonName {
    fn id(&self) -> &'static str {
        "button-name"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Critical
    }
    fn help(&self) -> &'static str {
        "Buttons must have discernible text"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let button = selector("button");
        document
            .analysis_root()
            .select(&button)
            .filter(|el| !has_accessible_name(*el))
            .map(node)
            .collect()
    }
}

struct LinkName;

impl Rule for LinkName {
    fn id(&self) -> &'static str {
        "link-name"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Serious
    }
    fn help(&self) -> &'static str {
        "Links must have discernible text"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let link = selector("a[href]");
        document
            .analysis_root()
            .select(&link)
            .filter(|el| !has_accessible_name(*el))
            .map(node)
            .collect()
    }
}

struct Label;

impl Rule for Label {
    fn id(&self) -> &'static str {
        "label"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Critical
    }
    fn help(&self) -> &'static str {
        "Form elements must have labels"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let root = document.analysis_root();
        let controls = selector("input, select, textarea");
        let label_for = selector("label[for]");
        let labeled_ids: HashSet<&str> = root
            .select(&label_for)
            .filter_map(|l| l.value().attr("for"))
            .collect();
        root.select(&controls)
            .filter(|el| {
                let ty = el
                    .value()
                    .attr("type")
                    .unwrap_or("text")
                    .to_ascii_lowercase();
                if el.value().name() == "input"
                    && matches!(
                        ty.as_str(),
                        "hidden" | "submit" | "reset" | "button" | "image"
                    )
                {
                    return false;
                }
                if ["aria-label", "aria-labelledby", "title"]
                    .iter()
                    .any(|a| attr_non_empty(*el, a))
                {
                    return false;
                }
                if el
                    .value()
                    .attr("id")
                    .is_some_and(|id| labeled_ids.contains(id))
                {
                    return false;
                }
                !inside_label(*el)
            })
            .map(node)
            .collect()
    }
}

struct HtmlHasLang;

impl Rule for HtmlHasLang {
    fn id(&self) -> &'static str {
        "html-has-lang"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Serious
    }
    fn help(&self) -> &'static str {
        "<html> element must have a lang attribute"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        if document.scope() != Scope::Document {
            return Vec::new();
        }
        let root = document.analysis_root();
        if root.value().name() == "html" && !attr_non_empty(root, "lang") {
            return vec![ViolationNode {
                html: opening_tag(root),
            }];
        }
        Vec::new()
    }
}

struct DocumentTitle;

impl Rule for DocumentTitle {
    fn id(&self) -> &'static str {
        "document-title"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Serious
    }
    fn help(&self) -> &'static str {
        "Documents must have a title element to aid in navigation"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        if document.scope() != Scope::Document {
            return Vec::new();
        }
        let root = document.analysis_root();
        let title = selector("head title");
        if root.select(&title).any(has_text) {
            return Vec::new();
        }
        vec![ViolationNode {
            html: opening_tag(root),
        }]
    }
}

struct DuplicateId;

impl Rule for DuplicateId {
    fn id(&self) -> &'static str {
        "duplicate-id"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2a"]
    }
    fn impact(&self) -> Impact {
        Impact::Minor
    }
    fn help(&self) -> &'static str {
        "id attribute value must be unique"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let with_id = selector("[id]");
        let mut seen: HashSet<&str> = HashSet::new();
        let mut nodes = Vec::new();
        for el in document.analysis_root().select(&with_id) {
            let Some(id) = el.value().attr("id") else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            if !seen.insert(id) {
                nodes.push(ViolationNode {
                    html: opening_tag(el),
                });
            }
        }
        nodes
    }
}

struct EmptyHeading;

impl Rule for EmptyHeading {
    fn id(&self) -> &'static str {
        "empty-heading"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["best-practice"]
    }
    fn impact(&self) -> Impact {
        Impact::Minor
    }
    fn help(&self) -> &'static str {
        "Headings should not be empty"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let heading = selector("h1, h2, h3, h4, h5, h6");
        document
            .analysis_root()
            .select(&heading)
            .filter(|el| !has_text(*el) && !attr_non_empty(*el, "aria-label"))
            .map(node)
            .collect()
    }
}

struct LandmarkOneMain;

impl Rule for LandmarkOneMain {
    fn id(&self) -> &'static str {
        "landmark-one-main"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["best-practice"]
    }
    fn impact(&self) -> Impact {
        Impact::Moderate
    }
    fn help(&self) -> &'static str {
        "Document should have one main landmark"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        if document.scope() != Scope::Document {
            return Vec::new();
        }
        let root = document.analysis_root();
        let main = selector("main, [role=\"main\"]");
        if root.select(&main).next().is_some() {
            return Vec::new();
        }
        vec![ViolationNode {
            html: opening_tag(root),
        }]
    }
}

/// Landmark element names for the `region` rule.
const LANDMARK_ELEMENTS: [&str; 5] = ["main", "nav", "header", "footer", "aside"];

/// Landmark roles for the `region` rule.
const LANDMARK_ROLES: [&str; 7] = [
    "main",
    "navigation",
    "banner",
    "contentinfo",
    "complementary",
    "region",
    "search",
];

/// Elements that never hold perceivable content.
const NON_CONTENT_ELEMENTS: [&str; 6] = ["script", "style", "noscript", "template", "link", "meta"];

struct Region;

impl Rule for Region {
    fn id(&self) -> &'static str {
        "region"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["best-practice"]
    }
    fn impact(&self) -> Impact {
        Impact::Moderate
    }
    fn help(&self) -> &'static str {
        "All page content should be contained by landmarks"
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        if document.scope() != Scope::Document {
            return Vec::new();
        }
        let root = document.analysis_root();
        let body_sel = selector("body");
        let Some(body) = root.select(&body_sel).next() else {
            return Vec::new();
        };

        let img = selector("img");
        body.children()
            .filter_map(ElementRef::wrap)
            .filter(|el| {
                let name = el.value().name();
                if LANDMARK_ELEMENTS.contains(&name) || NON_CONTENT_ELEMENTS.contains(&name) {
                    return false;
                }
                if el
                    .value()
                    .attr("role")
                    .is_some_and(|r| LANDMARK_ROLES.contains(&r))
                {
                    return false;
                }
                // only perceivable content needs a landmark
                has_text(*el) || el.select(&img).next().is_some() || el.value().name() == "img"
            })
            .map(|el| ViolationNode {
                html: opening_tag(el),
            })
            .collect()
    }
}

struct ColorContrast;

impl Rule for ColorContrast {
    fn id(&self) -> &'static str {
        "color-contrast"
    }
    fn tags(&self) -> &'static [&'static str] {
        &["wcag2aa"]
    }
    fn impact(&self) -> Impact {
        Impact::Serious
    }
    fn help(&self) -> &'static str {
        "Elements must have sufficient color contrast"
    }
    fn enabled_by_default(&self) -> bool {
        false
    }
    fn check(&self, document: &Document) -> Vec<ViolationNode> {
        let styled = selector("[style]");
        document
            .analysis_root()
            .select(&styled)
            .filter(|el| {
                el.value()
                    .attr("style")
                    .and_then(contrast::style_color_pair)
                    .is_some_and(|(fg, bg)| {
                        contrast::contrast_ratio(fg, bg) < contrast::AA_MIN_RATIO
                    })
            })
            .map(node)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html, Scope::Document)
    }

    fn fragment(body: &str) -> Document {
        let wrapped = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
             <body><main>{}</main></body></html>",
            body
        );
        Document::parse(&wrapped, Scope::Fragment)
    }

    #[test]
    fn test_image_alt_flags_missing_alt_only() {
        let d = fragment(
            "<img src=\"a.png\">\
             <img src=\"b.png\" alt=\"\">\
             <img src=\"c.png\" alt=\"A chart\">\
             <img src=\"d.png\" role=\"presentation\">",
        );
        let nodes = ImageAlt.check(&d);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].html.contains("a.png"));
    }

    #[test]
    fn test_button_name_accepts_text_and_aria_label() {
        let d = fragment(
            "<button></button>\
             <button>Click me</button>\
             <button aria-label=\"Close\"></button>\
             <button><img src=\"x.png\" alt=\"Search\"></button>",
        );
        let nodes = ButtonName.check(&d);
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_link_name_only_checks_anchors_with_href() {
        let d = fragment(
            "<a href=\"/a\"></a>\
             <a href=\"/b\">Read more</a>\
             <a name=\"anchor\"></a>",
        );
        let nodes = LinkName.check(&d);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].html.contains("/a"));
    }

    #[test]
    fn test_label_rule_recognizes_all_labelling_forms() {
        let d = fragment(
            "<input type=\"text\" name=\"bare\">\
             <label for=\"a\">A</label><input id=\"a\" type=\"text\">\
             <label>B <input type=\"text\" name=\"wrapped\"></label>\
             <input type=\"text\" aria-label=\"C\">\
             <input type=\"hidden\" name=\"token\">\
             <input type=\"submit\" value=\"Go\">",
        );
        let nodes = Label.check(&d);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].html.contains("bare"));
    }

    #[test]
    fn test_html_has_lang() {
        let missing = doc("<!DOCTYPE html><html><head><title>t</title></head><body></body></html>");
        assert_eq!(HtmlHasLang.check(&missing).len(), 1);

        let present =
            doc("<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head><body></body></html>");
        assert!(HtmlHasLang.check(&present).is_empty());
    }

    #[test]
    fn test_document_title_requires_non_empty_title() {
        let missing = doc("<!DOCTYPE html><html lang=\"en\"><head></head><body></body></html>");
        assert_eq!(DocumentTitle.check(&missing).len(), 1);

        let empty =
            doc("<!DOCTYPE html><html lang=\"en\"><head><title> </title></head><body></body></html>");
        assert_eq!(DocumentTitle.check(&empty).len(), 1);

        let present =
            doc("<!DOCTYPE html><html lang=\"en\"><head><title>Home</title></head><body></body></html>");
        assert!(DocumentTitle.check(&present).is_empty());
    }

    #[test]
    fn test_duplicate_id_flags_repeats_after_first() {
        let d = fragment(
            "<div id=\"x\">one</div><div id=\"x\">two</div><div id=\"y\">three</div>",
        );
        let nodes = DuplicateId.check(&d);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].html.contains("id=\"x\""));
    }

    #[test]
    fn test_empty_heading() {
        let d = fragment("<h1>Title</h1><h2></h2><h3 aria-label=\"named\"></h3>");
        let nodes = EmptyHeading.check(&d);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].html.starts_with("<h2"));
    }

    #[test]
    fn test_landmark_one_main() {
        let missing = doc(
            "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
             <body><div>content</div></body></html>",
        );
        assert_eq!(LandmarkOneMain.check(&missing).len(), 1);

        let with_role = doc(
            "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
             <body><div role=\"main\">content</div></body></html>",
        );
        assert!(LandmarkOneMain.check(&with_role).is_empty());
    }

    #[test]
    fn test_region_flags_content_outside_landmarks() {
        let d = doc(
            "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
             <body><div>stray text</div><main><p>ok</p></main>\
             <script>var x;</script></body></html>",
        );
        let nodes = Region.check(&d);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].html.starts_with("<div"));
    }

    #[test]
    fn test_color_contrast_on_inline_styles() {
        let bad = fragment("<div style=\"color: #fff; background-color: #fff;\">invisible</div>");
        assert_eq!(ColorContrast.check(&bad).len(), 1);

        let good = fragment("<div style=\"color: #000; background-color: #fff;\">readable</div>");
        assert!(ColorContrast.check(&good).is_empty());
        assert!(!ColorContrast.enabled_by_default());
    }
}
