//! Smoke checks for the compiled ASN.1 grammar.
use asn1_descriptor::GrammarDescriptor;
use asn1_language::Language;
use tracing::error;

/// Reported whenever the grammar descriptor cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Error loading ASN.1 grammar";

/// Loads `descriptor`, collapsing any loading error into [`LOAD_FAILURE_MESSAGE`].
/// The underlying cause is logged.
pub fn load_grammar<D>(descriptor: D) -> Result<Language, &'static str>
where
    D: Into<Option<&'static GrammarDescriptor>>,
{
    Language::new(descriptor).map_err(|cause| {
        error!(%cause, "grammar failed to load");
        LOAD_FAILURE_MESSAGE
    })
}

/// A small module touching the common token classes.
pub const SAMPLE_MODULE: &str = r#"Geometry DEFINITIONS AUTOMATIC TAGS ::= BEGIN
  -- points on a bounded grid
  Point ::= SEQUENCE {
    x INTEGER (0..255),
    y INTEGER (0..255) OPTIONAL
  }
  /* the origin */
  origin Point ::= { x 0, y 0 }
  label UTF8String ::= "home"
END
"#;
