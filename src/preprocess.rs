use regex::Regex;

// Minimal stand-in for the pipeline's shared vertex stage output, enough for
// fragment shaders that name it to parse standalone.
const VERTEX_OUTPUT_STUB: &str = "\nstruct VertexOutput { @location(0) uv: vec2<f32>, };\n\n";

/// Remove every line that starts (after optional leading whitespace) with a
/// host `#import` directive, including its line terminator.
pub fn strip_import_directives(source: &str) -> String {
    let import_regex = Regex::new(r"(?m)^\s*#import.*\r?\n").unwrap();
    import_regex.replace_all(source, "").into_owned()
}

/// Replace build-time `#{...}` placeholder tokens with a literal `0` so the
/// shader parses without the host's macro expansion.
pub fn substitute_placeholders(source: &str) -> String {
    let placeholder_regex = Regex::new(r"#\{[^}]*\}").unwrap();
    placeholder_regex.replace_all(source, "0").into_owned()
}

/// Prepend a minimal `VertexOutput` declaration when the shader does not
/// declare one itself.
pub fn ensure_vertex_output(source: &str) -> String {
    let decl_regex = Regex::new(r"\bstruct\s+VertexOutput\b").unwrap();
    if decl_regex.is_match(source) {
        source.to_owned()
    } else {
        format!("{VERTEX_OUTPUT_STUB}{source}")
    }
}

/// Apply all rewrites in order, yielding text the validator can parse
/// without the host pipeline.
pub fn prepare_standalone(source: &str) -> String {
    let stripped = strip_import_directives(source);
    let substituted = substitute_placeholders(&stripped);
    ensure_vertex_output(&substituted)
}
