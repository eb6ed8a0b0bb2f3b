//! Document generation end to end: form in, xml2rfc text out.

use draftwizard::config::ConfigLoader;
use draftwizard::document::{GenerateOptions, generate};
use draftwizard::form::FormState;
use draftwizard::wizard::Page;

mod common;

use common::DraftWizard;

fn form(name: &str) -> FormState {
    ConfigLoader::with_defaults()
        .load_form(&DraftWizard::fixture_path(&format!("forms/{name}")))
        .expect("fixture form loads")
}

fn gen_at(form: &FormState, reached: Page) -> String {
    generate(form, reached, &GenerateOptions::for_year(2024))
}

fn position(doc: &str, needle: &str) -> usize {
    doc.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in:\n{doc}"))
}

// ============================================================================
// Page gating
// ============================================================================

#[test]
fn empty_form_at_intro_is_empty() {
    assert_eq!(gen_at(&FormState::new(), Page::Intro), "");
}

#[test]
fn title_page_only() {
    let doc = gen_at(&form("title_only.yaml"), Page::Title);

    assert!(doc.contains(r#"docName="draft-abc-00""#));
    assert!(doc.contains("<title>This is My Great New Protocol</title>"));
    assert!(doc.contains(r#"<rfc category="info" docName="draft-abc-00" ipr="trust200902">"#));
    assert!(doc.contains("<!-- author information will go here -->"));
    assert!(!doc.contains("<author"));
    assert!(doc.contains("<!-- abstract will go here -->"));
    assert!(doc.contains("<!-- references will go here -->"));
    assert!(!doc.contains("<?rfc toc="));
    assert!(!doc.contains("<!ENTITY"));
}

#[test]
fn empty_filename_is_unknown() {
    let form = FormState::new().with("idtitle", "No Name");
    for page in [Page::Title, Page::Author, Page::Final] {
        assert!(gen_at(&form, page).contains(r#"docName="unknown""#));
    }
}

#[test]
fn missing_category_and_ipr_default_to_unknown() {
    let doc = gen_at(&FormState::new().with("filename", "x"), Page::Title);
    assert!(doc.contains(r#"<rfc category="unknown" docName="draft-x-00" ipr="unknown">"#));
}

#[test]
fn later_pages_add_content_in_order() {
    let form = form("full.yaml");
    let mut previous = 0;
    for page in Page::ALL {
        let len = gen_at(&form, page).len();
        assert!(len >= previous, "{page} produced less output than the page before");
        previous = len;
    }
}

// ============================================================================
// References
// ============================================================================

#[test]
fn references_declared_once_and_listed_in_order() {
    let doc = gen_at(&form("references.yaml"), Page::References);

    let rfc2119 = r#"<!ENTITY RFC2119 SYSTEM "http://xml.resource.org/public/rfc/bibxml/reference.RFC.2119.xml">"#;
    let rfc8174 = r#"<!ENTITY RFC8174 SYSTEM "http://xml.resource.org/public/rfc/bibxml/reference.RFC.8174.xml">"#;
    assert_eq!(doc.matches(rfc2119).count(), 1);
    assert_eq!(doc.matches(rfc8174).count(), 1);
    assert_eq!(doc.matches("<!ENTITY").count(), 2);

    let back = &doc[position(&doc, "<back>")..];
    let normative = &back[..position(back, "</references>")];
    let entries: Vec<&str> = normative
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with('&'))
        .collect();
    assert_eq!(entries, ["&RFC2119;", "&RFC8174;"]);
    assert!(!back.contains("Informative References"));
}

#[test]
fn references_are_cross_referenced_in_introduction() {
    let doc = gen_at(&form("full.yaml"), Page::References);
    let middle = &doc[position(&doc, "<middle>")..position(&doc, "</middle>")];
    assert!(middle.contains(r#"<xref target="RFC2119"/>"#));
    assert!(middle.contains(r#"<xref target="RFC8174"/>"#));
    assert!(middle.contains(r#"<xref target="I-D.ietf-example-base"/>"#));
}

#[test]
fn informative_references_get_their_own_block() {
    let doc = gen_at(&form("full.yaml"), Page::References);
    assert!(doc.contains(
        r#"<!ENTITY I-D.ietf-example-base SYSTEM "http://xml.resource.org/public/rfc/bibxml3/reference.I-D.ietf-example-base.xml">"#
    ));
    let informative = position(&doc, r#"<references title="Informative References">"#);
    assert!(informative > position(&doc, r#"<references title="Normative References">"#));
    assert!(doc[informative..].contains("&I-D.ietf-example-base;"));
}

#[test]
fn references_before_references_page_are_hidden() {
    let doc = gen_at(&form("references.yaml"), Page::KeywordsAbstract);
    assert!(!doc.contains("RFC2119;"));
    assert!(!doc.contains("<!ENTITY"));
}

// ============================================================================
// Authors
// ============================================================================

#[test]
fn author_without_postal_data_gets_placeholder() {
    let doc = gen_at(&form("joe_nobody.yaml"), Page::Author);
    assert!(doc.contains(r#"<author fullname="Joe Nobody" initials="J." surname="Nobody">"#));
    assert!(doc.contains("<!-- postal><street/><city/><region/><code/><country/></postal -->"));
    assert!(!doc.contains("<postal>"));
    assert!(doc.contains("<!-- <email/> -->"));
}

#[test]
fn full_authors() {
    let doc = gen_at(&form("full.yaml"), Page::Author);

    assert!(doc.contains(
        r#"<author fullname="Alice Example" initials="A." surname="Example" role="editor">"#
    ));
    assert!(doc.contains("<organization>Example Corp</organization>"));
    assert!(doc.contains("<street>1 Main Street</street>"));
    assert!(doc.contains("<city>Springfield</city>"));
    assert!(doc.contains("<!-- <region/> -->"));
    assert!(doc.contains("<country>US</country>"));
    assert!(doc.contains("<email>alice@example.com</email>"));

    assert!(doc.contains(r#"<author fullname="Bob Sample" initials="B." surname="Sample">"#));
    assert!(doc.contains("<uri>https://example.org/bob</uri>"));

    assert!(position(&doc, "Alice Example") < position(&doc, "Bob Sample"));
    assert_eq!(doc.matches("<author ").count(), 2);
}

#[test]
fn blank_slot_one_is_skipped() {
    let doc = gen_at(&form("empty_author.yaml"), Page::Author);
    assert_eq!(doc.matches("<author ").count(), 1);
    assert!(doc.contains(r#"fullname="Second Author""#));
    assert!(doc.contains(r#"surname="unknown""#));
}

// ============================================================================
// Front matter details
// ============================================================================

#[test]
fn values_are_trimmed_and_escaped() {
    let doc = gen_at(&form("full.yaml"), Page::Final);
    assert!(doc.contains(
        r#"<title abbrev="Example Extensions">Extensions to the &lt;Example&gt; Protocol &amp; Friends</title>"#
    ));
    assert!(doc.contains(r#"docName="draft-ietf-example-ext-00""#));
    assert!(doc.contains(r#"updates="2119""#));
    assert!(!doc.contains("obsoletes="));
    assert!(doc.contains("This document extends<br/>the example protocol."));
}

#[test]
fn keywords_and_placeholders() {
    let doc = gen_at(&form("full.yaml"), Page::KeywordsAbstract);
    assert!(doc.contains("<keyword>example</keyword>"));
    assert!(doc.contains("<keyword>extension</keyword>"));
    assert_eq!(doc.matches("<!-- <keyword/> -->").count(), 3);
    assert!(doc.contains("<area>Security</area>"));
    assert!(doc.contains("<workgroup>Example Working Group</workgroup>"));
}

#[test]
fn blank_abstract_is_not_yet_specified() {
    let doc = gen_at(&form("title_only.yaml"), Page::KeywordsAbstract);
    assert!(doc.contains("not yet specified"));
}

#[test]
fn date_uses_given_year() {
    let doc = generate(
        &form("title_only.yaml"),
        Page::Title,
        &GenerateOptions::for_year(1999),
    );
    assert!(doc.contains(r#"<date year="1999" />"#));
}

// ============================================================================
// Formatting options
// ============================================================================

#[test]
fn formatting_pis_after_options_page() {
    let form = form("full.yaml");
    assert!(!gen_at(&form, Page::References).contains("<?rfc toc="));

    let doc = gen_at(&form, Page::Options);
    assert!(doc.contains(r#"<?rfc toc="yes"?>"#));
    assert!(doc.contains(r#"<?rfc tocdepth="4"?>"#));
    assert!(doc.contains(r#"<?rfc subcompact="no" ?>"#));
    assert!(position(&doc, "<?rfc toc=") < position(&doc, "<rfc "));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn generation_is_deterministic() {
    let form = form("full.yaml");
    let options = GenerateOptions::for_year(2024);
    for page in Page::ALL {
        assert_eq!(generate(&form, page, &options), generate(&form, page, &options));
    }
}

#[test]
fn custom_bibxml_templates() {
    let loaded = ConfigLoader::with_defaults()
        .load(&DraftWizard::fixture_path("config/mirror.yaml"))
        .unwrap();
    let options = loaded.config.generate_options(Some(2024));
    let doc = generate(&form("references.yaml"), Page::Final, &options);
    assert!(doc.contains(
        r#"<!ENTITY RFC2119 SYSTEM "https://bib.example.org/rfc/reference.RFC.2119.xml">"#
    ));
}
