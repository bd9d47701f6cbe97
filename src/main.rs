use depgraph_viz::adapters::outbound::console::StderrProgressReporter;
use depgraph_viz::adapters::outbound::filesystem::FixtureDependencySource;
use depgraph_viz::adapters::outbound::network::{CachingDependencySource, PyPiDependencySource};
use depgraph_viz::adapters::outbound::renderers::SummaryRenderer;
use depgraph_viz::application::dto::{GraphRequest, GraphResponse, OutputFormat};
use depgraph_viz::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use depgraph_viz::application::use_cases::BuildGraphUseCase;
use depgraph_viz::cli::Args;
use depgraph_viz::config::{load_config_from_path, SourceMode};
use depgraph_viz::ports::outbound::DependencySource;
use depgraph_viz::shared::error::ExitCode;
use depgraph_viz::shared::{DepgraphError, Result};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config_from_path(&args.config)?;
    let request = GraphRequest::new(config.package_name.clone(), args.reverse.clone());

    // A single requested format is emitted bare so it can be piped as-is
    let full_report = args.format.is_none();
    let mut report = String::new();

    if full_report && !args.no_config_print {
        report.push_str(&config.display_lines().join("\n"));
        report.push_str("\n\n");
    }

    let response = match &config.mode {
        SourceMode::Real { repo_url } => {
            let root = config.root_package()?;
            let source = PyPiDependencySource::new(repo_url, root.clone())?;

            if full_report {
                match source.fetch_raw_requirements().await {
                    Ok(requirements) => {
                        report.push_str(
                            &SummaryRenderer::new().render_direct_requirements(&root, &requirements),
                        );
                        report.push('\n');
                    }
                    Err(e) => eprintln!(
                        "⚠️  Warning: Failed to list direct dependencies of {}: {:#}",
                        root, e
                    ),
                }
            }

            resolve(CachingDependencySource::new(source), request).await?
        }
        SourceMode::Test { test_repo_path } => {
            resolve(FixtureDependencySource::from_file(test_repo_path)?, request).await?
        }
    };

    let formats = args
        .format
        .map(|format| vec![format])
        .unwrap_or_else(|| RendererFactory::default_formats(config.ascii_tree));
    report.push_str(&render_sections(&response, &formats));

    // With a single format stdout stays that format only, e.g. valid DOT
    let (reverse_lines, missing_target) = render_reverse_dependencies(&response);
    if full_report && !reverse_lines.is_empty() {
        report.push('\n');
        report.push_str(&reverse_lines);
    } else {
        eprint!("{}", reverse_lines);
    }

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&report)?;

    match missing_target {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

async fn resolve<S: DependencySource>(source: S, request: GraphRequest) -> Result<GraphResponse> {
    BuildGraphUseCase::new(source, StderrProgressReporter::new())
        .execute(request)
        .await
}

fn render_sections(response: &GraphResponse, formats: &[OutputFormat]) -> String {
    let titled = formats.len() > 1;
    formats
        .iter()
        .map(|format| {
            let body = RendererFactory::create(*format).render(&response.graph, &response.cycles);
            if titled {
                format!("--- {} ---\n{}", RendererFactory::section_title(*format), body)
            } else {
                body
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per reverse query, plus the first `NotFound` among them
fn render_reverse_dependencies(response: &GraphResponse) -> (String, Option<DepgraphError>) {
    let renderer = SummaryRenderer::new();
    let mut lines = String::new();
    let mut first_error = None;
    for query in &response.reverse_dependencies {
        match &query.dependents {
            Ok(dependents) => lines.push_str(&renderer.render_reverse(&query.target, dependents)),
            Err(e) => {
                lines.push_str(&format!("Packages depending on {}: (not in graph)\n", query.target));
                first_error.get_or_insert_with(|| e.clone());
            }
        }
    }
    (lines, first_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgraph_viz::application::dto::ReverseDependencies;
    use depgraph_viz::dependency_graph::domain::{DependencyEdge, DependencyGraph, PackageName};
    use std::collections::BTreeSet;

    fn name(value: &str) -> PackageName {
        PackageName::new(value).unwrap()
    }

    fn self_loop_response(reverse: Vec<ReverseDependencies>) -> GraphResponse {
        let adjacency = [(name("X"), vec![name("X")])].into_iter().collect();
        GraphResponse::new(
            DependencyGraph::new(name("X"), adjacency),
            vec![DependencyEdge::new(name("X"), name("X"))],
            reverse,
        )
    }

    #[test]
    fn test_single_format_has_no_title() {
        let output = render_sections(&self_loop_response(vec![]), &[OutputFormat::Tree]);
        assert_eq!(output, "X\n└── X (cycle)\n");
    }

    #[test]
    fn test_multiple_formats_are_titled() {
        let output = render_sections(
            &self_loop_response(vec![]),
            &[OutputFormat::Summary, OutputFormat::Tree],
        );
        assert!(output.starts_with("--- Dependency summary ---\n"));
        assert!(output.contains("\n--- ASCII tree ---\nX\n└── X (cycle)\n"));
    }

    #[test]
    fn test_render_reverse_dependencies() {
        let response = self_loop_response(vec![
            ReverseDependencies {
                target: "X".to_string(),
                dependents: Ok(BTreeSet::from([name("X")])),
            },
            ReverseDependencies {
                target: "Q".to_string(),
                dependents: Err(DepgraphError::not_found("Q")),
            },
        ]);

        let (lines, missing) = render_reverse_dependencies(&response);

        assert_eq!(
            lines,
            "Packages depending on X: X\nPackages depending on Q: (not in graph)\n"
        );
        assert_eq!(missing, Some(DepgraphError::not_found("Q")));
    }

    #[test]
    fn test_render_reverse_dependencies_without_queries() {
        let (lines, missing) = render_reverse_dependencies(&self_loop_response(vec![]));
        assert!(lines.is_empty());
        assert!(missing.is_none());
    }
}
