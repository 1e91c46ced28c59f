/// Schema and options files loaded from disk, and command-line parsing
use clap::Parser;
use solver_options::cli::Cli;
use solver_options::cli::app::Commands;
use solver_options::config::{SchemaFile, load_overrides};
use solver_options::{BaseSolver, OptionValue, OptionsError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

const SCHEMA: &str = r#"
name = "heat"
category = "Heat equation solver"
check_default_options = true
immutable = ["meshFile"]

[deprecated]
maxIter = "Use maxIterations instead."

[informs]
"0" = "Converged"
"1" = "Iteration limit reached"

[[option]]
name = "maxIterations"
type = "int"
default = 100

[[option]]
name = "tolerance"
type = "float"
default = 1e-6

[[option]]
name = "scheme"
type = "str"
choices = ["implicit", "explicit", "crank-nicolson"]

[[option]]
name = "meshFile"
type = "str"
default = "mesh.cgns"

[[option]]
name = "monitor"
type = ["list", "dict"]
default = []
"#;

fn write_temp(file_name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("solver-options-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let unique = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = dir.join(format!("{}-{}", unique, file_name));
    std::fs::write(&path, contents).unwrap();
    path
}

fn load_solver(overrides: &str) -> Result<BaseSolver, OptionsError> {
    let schema_path = write_temp("heat-schema.toml", SCHEMA);
    let file = SchemaFile::load(&schema_path).unwrap();

    let options_path = write_temp("heat-options.toml", overrides);
    let overrides = load_overrides(&options_path).unwrap();

    Ok(BaseSolver::new(
        &file.name,
        &file.category,
        file.to_schema().unwrap(),
        overrides,
        file.registry_config(),
    )?
    .with_informs(file.informs().unwrap()))
}

#[test]
fn test_load_schema_and_overrides() {
    let mut solver = load_solver("MeshFile = \"plate.cgns\"\nscheme = \"explicit\"\n").unwrap();

    assert_eq!(solver.name, "heat");
    assert_eq!(solver.get_option("meshfile").unwrap(), &OptionValue::from("plate.cgns"));
    assert_eq!(solver.get_option("scheme").unwrap(), &OptionValue::from("explicit"));
    assert_eq!(solver.get_option("maxIterations").unwrap(), &OptionValue::Int(100));
    assert_eq!(solver.inform(1), Some("Iteration limit reached"));

    let names: Vec<String> = solver.get_modified_options().names().map(String::from).collect();
    assert_eq!(names, vec!["scheme", "meshFile"]);

    assert!(matches!(
        solver.set_option("meshFile", "other.cgns"),
        Err(OptionsError::Immutable { .. })
    ));
    assert!(matches!(
        solver.set_option("maxIter", 10),
        Err(OptionsError::Deprecated { .. })
    ));
    solver.set_option("monitor", vec!["residual"]).unwrap();
}

#[test]
fn test_override_with_typo_suggests_name() {
    let err = load_solver("tolerence = 1e-8\n").err().unwrap();
    match err {
        OptionsError::Unknown { name, suggestions } => {
            assert_eq!(name, "tolerence");
            assert_eq!(suggestions[0], "tolerance");
        }
        other => panic!("Expected Unknown, got {:?}", other),
    }
}

#[test]
fn test_override_with_wrong_type() {
    let err = load_solver("maxIterations = 10.5\n").err().unwrap();
    assert!(matches!(err, OptionsError::Type { .. }));
}

#[test]
fn test_cli_parses_show() {
    let cli = Cli::try_parse_from([
        "solver-options",
        "show",
        "--modified",
        "--set",
        "intOption=2",
        "--set",
        "boolOption=false",
        "--no-check",
    ])
    .unwrap();

    match cli.command {
        Commands::Show(show) => {
            assert!(show.modified);
            assert!(show.source.no_check);
            assert_eq!(show.source.assignments, vec!["intOption=2", "boolOption=false"]);

            let solver = show.source.build_solver().unwrap();
            assert_eq!(solver.get_modified_options().len(), 2);
        }
        _ => panic!("Expected show command"),
    }
}

#[test]
fn test_cli_parses_get() {
    let cli = Cli::try_parse_from(["solver-options", "get", "INTOPTION", "--json"]).unwrap();
    match cli.command {
        Commands::Get(get) => {
            assert_eq!(get.name, "INTOPTION");
            assert!(get.json);
            let solver = get.source.build_solver().unwrap();
            assert_eq!(solver.get_option(&get.name).unwrap(), &OptionValue::Int(1));
        }
        _ => panic!("Expected get command"),
    }
}

#[test]
fn test_cli_rejects_json_with_plain() {
    assert!(Cli::try_parse_from(["solver-options", "show", "--json", "--plain"]).is_err());
}
