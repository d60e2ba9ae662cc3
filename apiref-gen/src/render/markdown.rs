use crate::{Argument, Endpoint, PLAIN_TEXT_RESPONSE, builder::CodeBuilder};

/// Render an API reference document.
///
/// Endpoints appear in the order given, which for a generated catalog is
/// sorted by name.
pub fn markdown(endpoints: &[Endpoint], title: &str) -> String {
    let builder = CodeBuilder::default().line(&format!("# {}", title));
    endpoints
        .iter()
        .fold(builder, |b, endpoint| render_endpoint(b.blank(), endpoint))
        .build()
}

fn render_endpoint(b: CodeBuilder, endpoint: &Endpoint) -> CodeBuilder {
    let b = b
        .line(&format!("## `{}`", endpoint.name))
        .when(!endpoint.description.is_empty(), |b| {
            b.blank().line(&endpoint.description)
        })
        .when(!endpoint.arguments.is_empty(), |b| {
            b.blank()
                .line("### Arguments")
                .blank()
                .line("| Name | Type | Required | Description |")
                .line("|------|------|----------|-------------|")
                .each(&endpoint.arguments, |b, arg| {
                    b.line(&format!(
                        "| `{}` | {} | {} | {} |",
                        arg.name,
                        arg.ty,
                        if arg.required { "yes" } else { "no" },
                        cell(&arg.description)
                    ))
                })
        })
        .when(!endpoint.options.is_empty(), |b| {
            b.blank()
                .line("### Options")
                .blank()
                .line("| Name | Type | Default | Description |")
                .line("|------|------|---------|-------------|")
                .each(&endpoint.options, |b, opt| b.line(&option_row(opt)))
        })
        .blank()
        .line("### Response")
        .blank();

    if endpoint.response == PLAIN_TEXT_RESPONSE {
        b.line(&endpoint.response)
    } else {
        b.line("```json")
            .each(endpoint.response.lines(), |b, line| b.line(line))
            .line("```")
    }
}

fn option_row(opt: &Argument) -> String {
    let default = if opt.default.is_empty() {
        String::new()
    } else {
        format!("`{}`", opt.default)
    };
    format!(
        "| `{}` | {} | {} | {} |",
        opt.name,
        opt.ty,
        default,
        cell(&opt.description)
    )
}

/// Make text safe for a single table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
