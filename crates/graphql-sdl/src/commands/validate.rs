use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_sdl::Source;
use libgraphql_sdl::schema::Schema;
use libgraphql_sdl::schema::SchemaBuildError;
use libgraphql_sdl::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Write the validated schema, bincode-encoded, to this path.",
        long,
        value_name="PATH",
    )]
    emit_schema: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Files found while scanning the input paths.
#[derive(Debug, Default)]
struct FileScan {
    file_paths: Vec<PathBuf>,
    num_skipped_files: usize,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = match self.scan_paths() {
            Ok(scan) => scan,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths: {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Found {} GraphQL files to be validated.",
            scan.file_paths.len(),
        );

        let sources = match read_sources(&scan.file_paths).await {
            Ok(sources) => sources,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to read GraphQL files: {err:#}",
                output_utils::RED_X,
            )),
        };

        let schema = match SchemaBuilder::new().add_sources(sources.clone()).build() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {}",
                output_utils::RED_X,
                render_build_error(&err, &sources),
            )),
        };

        if let Some(emit_path) = &self.emit_schema
            && let Err(err) = emit_schema(&schema, emit_path).await {
            return CommandResult::stderr(format_args!(
                "{} Failed to emit schema: {err:#}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.",
            ),
            output_utils::GREEN_CHECK,
            scan.file_paths.len(),
            scan.num_skipped_files,
            schema.types().count(),
            schema.directives().count(),
        ))
    }
}

impl ValidateCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn scan_paths(&self) -> anyhow::Result<FileScan> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut scan = FileScan::default();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("Error while walking filesystem entries at/under {path:#?}")
                })?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                log::trace!("Found file at {path:#?}.");
                if let Some(ext) = path.extension().and_then(|ext| ext.to_str())
                    && graphql_file_exts.contains(ext) {
                    scan.file_paths.push(std::fs::canonicalize(path)?);
                } else {
                    scan.num_skipped_files += 1;
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file loaded and validated as a GraphQL
        // file, even if its file extension doesn't match one of the file
        // extensions specified in `graphql_file_exts`.
        if scan.file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            let canonicalized_path = std::fs::canonicalize(only_path)?;
            log::warn!(
                "Proceeding to validate {canonicalized_path:#?} even \
                though it doesn't match any of the --graphql-file-exts \
                ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            scan.num_skipped_files = scan.num_skipped_files.saturating_sub(1);
            scan.file_paths.push(canonicalized_path);
        }

        Ok(scan)
    }
}

/// Reads every file concurrently, returning the sources in the same order as
/// `file_paths`.
async fn read_sources(file_paths: &[PathBuf]) -> anyhow::Result<Vec<Source>> {
    let reads: Vec<_> = file_paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move {
            let body = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {path:#?}"))?;
            anyhow::Ok(Source::new(path.display().to_string(), body))
        }))
        .collect();

    let mut sources = Vec::with_capacity(reads.len());
    for read in reads {
        sources.push(read.await??);
    }
    Ok(sources)
}

async fn emit_schema(schema: &Schema, path: &Path) -> anyhow::Result<()> {
    let bytes = schema.to_bincode_bytes()?;
    tokio::fs::write(path, &bytes)
        .await
        .with_context(|| format!("Failed to write {path:#?}"))?;
    log::info!("Wrote {} byte schema to {path:#?}.", bytes.len());
    Ok(())
}

/// Renders a parse or validation error with a snippet of the source it came
/// from.
fn render_build_error(err: &SchemaBuildError, sources: &[Source]) -> String {
    match err {
        SchemaBuildError::Parse(parse_error) => {
            let body = sources
                .iter()
                .find(|source| Some(source.name()) == parse_error.source_name())
                .map(Source::body);
            parse_error.format_detailed(body)
        },
        SchemaBuildError::Validation(validation_error) => {
            format!(
                "Errors validating schema:\n{}",
                validation_error.format_detailed(sources),
            )
        },
    }
}
