use std::fmt::Write;

use crate::request::Blueprint;
use crate::templates::{API_PORT, HEALTH_PATH};

/// Annotated tree of the generated layout.
pub fn project_tree(blueprint: &Blueprint) -> String {
    let name = &blueprint.project_name;
    let mut lines = vec![
        format!("- {name}/"),
        "  |- cmd/".to_string(),
        format!("  |  \\- {name}/ (application entrypoints)"),
        "  |     \\- main.go".to_string(),
        "  |- internal/ (private code)".to_string(),
    ];

    if blueprint.is_rest_api() {
        lines.extend(
            [
                "  |  |- models/ (data models)",
                "  |  \\- database/ (database connections)",
                "  |- pkg/ (public code)",
                "  |- api/ (API definitions)",
                "  |  |- handlers/ (request handlers)",
                "  |  |- middleware/ (HTTP middleware)",
                "  |  \\- routes/ (route definitions)",
                "  |- web/ (web assets)",
                "  |  |- templates/ (HTML templates)",
                "  |  \\- static/ (static assets)",
                "  |     |- css/ (stylesheets)",
                "  |     \\- js/ (javascript files)",
            ]
            .map(String::from),
        );
    } else {
        lines.push("  |- pkg/ (public code)".to_string());
    }

    lines.extend(
        [
            "  |- configs/ (configuration files)",
            "  |- test/ (test files)",
            "  |- README.md",
            "  |- .gitignore",
            "  |- Makefile",
            "  \\- go.mod",
        ]
        .map(String::from),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// How to enter and run the project, plus the API URLs in REST API mode.
pub fn next_steps(blueprint: &Blueprint) -> String {
    let name = &blueprint.project_name;
    let entry = blueprint.entry_point();
    let mut out = String::new();

    if blueprint.is_rest_api() {
        let _ = writeln!(out, "To run your REST API:");
    } else {
        let _ = writeln!(out, "To run your project:");
    }
    let _ = writeln!(out, "  cd {name}");
    let _ = writeln!(out, "  go run {entry}");

    if blueprint.is_rest_api() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Your API will be available at: http://localhost:{API_PORT}");
        let _ = writeln!(
            out,
            "Health check endpoint: http://localhost:{API_PORT}{HEALTH_PATH}"
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Mode;

    fn blueprint(mode: Mode) -> Blueprint {
        Blueprint {
            project_name: "demo".into(),
            identity: "alice".into(),
            module_name: "github.com/alice/demo".into(),
            go_version: "1.22".into(),
            mode,
        }
    }

    #[test]
    fn standard_tree_lists_only_created_dirs() {
        let tree = project_tree(&blueprint(Mode::Standard));
        assert!(tree.starts_with("- demo/\n"));
        assert!(tree.contains("  |  \\- demo/ (application entrypoints)"));
        assert!(!tree.contains("api/"));
        assert!(!tree.contains("web/"));
        assert!(tree.ends_with("  \\- go.mod\n"));
    }

    #[test]
    fn api_tree_includes_api_and_web() {
        let tree = project_tree(&blueprint(Mode::RestApi));
        for entry in ["models/", "handlers/", "middleware/", "routes/", "css/", "js/"] {
            assert!(tree.contains(entry), "missing {entry}");
        }
    }

    #[test]
    fn next_steps_by_mode() {
        let standard = next_steps(&blueprint(Mode::Standard));
        assert_eq!(
            standard,
            "To run your project:\n  cd demo\n  go run cmd/demo/main.go\n"
        );

        let api = next_steps(&blueprint(Mode::RestApi));
        assert!(api.starts_with("To run your REST API:\n"));
        assert!(api.contains("Your API will be available at: http://localhost:8080\n"));
        assert!(api.contains("Health check endpoint: http://localhost:8080/api/health\n"));
    }
}
