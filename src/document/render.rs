//! Serializes a [`DraftDocument`] into xml2rfc v2 text.
//!
//! Output is assembled line by line; every value in the model is already
//! escaped, so this module only deals with markup.

use crate::document::author::{AuthorRecord, PostalAddress};
use crate::document::model::{DraftDocument, FormattingOptions, KeywordsAbstract, RfcElement};
use crate::document::references::{BibXmlTemplates, ReferenceList};
use crate::document::section::Section;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="US-ASCII"?>"#;
const DOCTYPE_OPEN: &str = r#"<!DOCTYPE rfc SYSTEM "rfc2629.dtd" ["#;
const STYLESHEET_PI: &str =
    r#"<?xml-stylesheet type="text/xsl" href="rfc2629.xslt" ?> <!-- used by XSLT processors -->"#;

/// Renders the complete document text, newline-terminated.
#[must_use]
pub fn render(doc: &DraftDocument, templates: &BibXmlTemplates) -> String {
    let mut out = Vec::new();

    out.push(XML_DECL.to_string());
    out.push(DOCTYPE_OPEN.to_string());
    if let Some(refs) = doc.references.visited() {
        render_entities(&mut out, refs, templates);
    }
    out.push("]>".to_string());
    out.push(STYLESHEET_PI.to_string());
    out.push("<!-- OPTIONS, known as processing instructions (PIs) go here. -->".to_string());
    if let Some(formatting) = doc.formatting.visited() {
        render_formatting(&mut out, formatting);
    }

    match &doc.rfc {
        Section::NotYetVisited => out.push("<!-- rfc will be defined here -->".to_string()),
        Section::Visited(rfc) => render_rfc(&mut out, rfc, &doc.references),
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn render_entities(out: &mut Vec<String>, refs: &ReferenceList, templates: &BibXmlTemplates) {
    for entry in refs.iter() {
        out.push(format!(
            r#"<!ENTITY {} SYSTEM "{}">"#,
            entry.entity_name(),
            entry.system_url(templates)
        ));
    }
}

fn render_formatting(out: &mut Vec<String>, f: &FormattingOptions) {
    let lines = [
        "<!-- For a complete list and description of PIs,".to_string(),
        "     please see http://xml.resource.org/authoring/README.html. -->".to_string(),
        "<!-- Below are generally applicable PIs that most I-Ds might want to use. -->".to_string(),
        r#"<?rfc strict="yes" ?> <!-- give errors regarding ID-nits and DTD validation -->"#
            .to_string(),
        "<!-- control the table of contents (ToC): -->".to_string(),
        format!(r#"<?rfc toc="{}"?> <!-- generate a ToC -->"#, f.toc),
        format!(
            r#"<?rfc tocdepth="{}"?> <!-- the number of levels of subsections in ToC. default: 3 -->"#,
            f.tocdepth
        ),
        "<!-- control references: -->".to_string(),
        format!(
            r#"<?rfc symrefs="{}"?> <!-- use symbolic references tags, i.e, [RFC2119] instead of [1] -->"#,
            f.symrefs
        ),
        format!(
            r#"<?rfc sortrefs="{}" ?> <!-- sort the reference entries alphabetically -->"#,
            f.sortrefs
        ),
        "<!-- control vertical white space:".to_string(),
        "     (using these PIs as follows is recommended by the RFC Editor) -->".to_string(),
        format!(
            r#"<?rfc compact="{}" ?> <!-- do not start each main section on a new page -->"#,
            f.compact
        ),
        format!(
            r#"<?rfc subcompact="{}" ?> <!-- keep one blank line between list items -->"#,
            f.subcompact
        ),
        "<!-- end of popular PIs -->".to_string(),
    ];
    out.extend(lines);
}

fn render_rfc(out: &mut Vec<String>, rfc: &RfcElement, references: &Section<ReferenceList>) {
    let mut open = format!(
        r#"<rfc category="{}" docName="{}" ipr="{}""#,
        rfc.category, rfc.doc_name, rfc.ipr
    );
    if let Some(updates) = &rfc.updates {
        open.push_str(&format!(r#" updates="{updates}""#));
    }
    if let Some(obsoletes) = &rfc.obsoletes {
        open.push_str(&format!(r#" obsoletes="{obsoletes}""#));
    }
    open.push('>');
    out.push(open);

    render_front(out, rfc);
    render_middle(out, references);
    render_back(out, references);

    out.push("</rfc>".to_string());
}

fn render_front(out: &mut Vec<String>, rfc: &RfcElement) {
    out.push("  <front>".to_string());
    match &rfc.short_title {
        Some(abbrev) => out.push(format!(r#"    <title abbrev="{abbrev}">{}</title>"#, rfc.title)),
        None => out.push(format!("    <title>{}</title>", rfc.title)),
    }

    match &rfc.authors {
        Section::NotYetVisited => {
            out.push("    <!-- author information will go here -->".to_string());
        }
        Section::Visited(authors) => {
            for author in authors {
                render_author(out, author);
            }
        }
    }

    out.push(format!(r#"    <date year="{}" />"#, rfc.year));
    provisional(out, 4, "area", rfc.area.as_deref());
    provisional(out, 4, "workgroup", rfc.workgroup.as_deref());

    match &rfc.keywords_abstract {
        Section::NotYetVisited => out.push("    <!-- abstract will go here -->".to_string()),
        Section::Visited(ka) => render_keywords_abstract(out, ka),
    }
    out.push("  </front>".to_string());
}

fn render_author(out: &mut Vec<String>, author: &AuthorRecord) {
    let role = if author.editor { r#" role="editor""# } else { "" };
    out.push(format!(
        r#"    <author fullname="{}" initials="{}" surname="{}"{role}>"#,
        author.fullname, author.initials, author.surname
    ));
    provisional(out, 6, "organization", author.organization.as_deref());
    out.push("      <address>".to_string());
    match &author.postal {
        Some(postal) => render_postal(out, postal),
        None => out.push(
            "        <!-- postal><street/><city/><region/><code/><country/></postal -->".to_string(),
        ),
    }
    provisional(out, 8, "phone", author.phone.as_deref());
    provisional(out, 8, "facsimile", author.facsimile.as_deref());
    provisional(out, 8, "email", author.email.as_deref());
    provisional(out, 8, "uri", author.uri.as_deref());
    out.push("      </address>".to_string());
    out.push("    </author>".to_string());
}

fn render_postal(out: &mut Vec<String>, postal: &PostalAddress) {
    out.push("        <postal>".to_string());
    element(out, 10, "street", &postal.street);
    provisional(out, 10, "city", postal.city.as_deref());
    provisional(out, 10, "region", postal.region.as_deref());
    provisional(out, 10, "code", postal.code.as_deref());
    provisional(out, 10, "country", postal.country.as_deref());
    out.push("        </postal>".to_string());
}

fn render_keywords_abstract(out: &mut Vec<String>, ka: &KeywordsAbstract) {
    for keyword in &ka.keywords {
        provisional(out, 4, "keyword", keyword.as_deref());
    }
    out.push("    <abstract>".to_string());
    out.push("      <t>".to_string());
    out.push(format!("        {}", ka.abstract_text));
    out.push("      </t>".to_string());
    out.push("    </abstract>".to_string());
}

fn render_middle(out: &mut Vec<String>, references: &Section<ReferenceList>) {
    let intro = [
        "  <middle>",
        r#"    <section title="Introduction">"#,
        "      <t>",
        r#"        The key words "MUST", "MUST NOT", "REQUIRED", "SHALL", "SHALL NOT","#,
        r#"        "SHOULD", "SHOULD NOT", "RECOMMENDED", "MAY", and "OPTIONAL" in"#,
        "        this document are to be interpreted as described in",
        r#"        <xref target="RFC2119"/>."#,
        "      </t>",
        "      <t>",
        "        This document is being discussed on the xyz@example.org mailing list.",
        "      </t>",
        "      <t>",
        "        Add some text here. You will need to use these references somewhere within the text:",
    ];
    out.extend(intro.iter().map(ToString::to_string));

    if let Some(refs) = references.visited() {
        for entry in refs.iter() {
            out.push(format!(r#"        <xref target="{}"/>"#, entry.entity_name()));
        }
    }

    let rest = [
        "      </t>",
        "    </section>",
        r#"    <section anchor="Acknowledgements" title="Acknowledgements">"#,
        "    </section>",
        r#"    <section anchor="IANA" title="IANA Considerations">"#,
        "    </section>",
        r#"    <section anchor="Security" title="Security Considerations">"#,
        "    </section>",
        "  </middle>",
    ];
    out.extend(rest.iter().map(ToString::to_string));
}

fn render_back(out: &mut Vec<String>, references: &Section<ReferenceList>) {
    let refs = match references {
        Section::NotYetVisited => {
            out.push("  <!-- references will go here -->".to_string());
            return;
        }
        Section::Visited(refs) => refs,
    };

    out.push("  <back>".to_string());
    out.push(r#"    <references title="Normative References">"#.to_string());
    for entry in &refs.normative {
        out.push(format!("      &{};", entry.entity_name()));
    }
    out.push("    </references>".to_string());
    if !refs.informative.is_empty() {
        out.push(r#"    <references title="Informative References">"#.to_string());
        for entry in &refs.informative {
            out.push(format!("      &{};", entry.entity_name()));
        }
        out.push("    </references>".to_string());
    }
    out.push("  </back>".to_string());
}

/// `<tag>value</tag>` when present, `<!-- <tag/> -->` otherwise.
fn provisional(out: &mut Vec<String>, indent: usize, tag: &str, value: Option<&str>) {
    match value {
        Some(value) => element(out, indent, tag, value),
        None => out.push(format!("{:indent$}<!-- <{tag}/> -->", "")),
    }
}

fn element(out: &mut Vec<String>, indent: usize, tag: &str, value: &str) {
    out.push(format!("{:indent$}<{tag}>{value}</{tag}>", ""));
}
