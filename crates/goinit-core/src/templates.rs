//! File templates for the generated Go project.
//!
//! Every template is a plain `format!` over the [`Blueprint`]; there is no
//! template engine.

use crate::request::Blueprint;

/// Router library imported by the REST API templates and fetched with `go get`.
pub const ROUTER_MODULE: &str = "github.com/gorilla/mux";

/// Port the generated REST API listens on.
pub const API_PORT: u16 = 8080;

pub const HEALTH_PATH: &str = "/api/health";

/// A file to write, relative to the project root with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub contents: String,
}

impl GeneratedFile {
    fn new(path: impl Into<String>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Go sources: the entry point, plus routes, handlers and middleware in API mode.
pub fn source_files(blueprint: &Blueprint) -> Vec<GeneratedFile> {
    if blueprint.is_rest_api() {
        vec![
            GeneratedFile::new(blueprint.entry_point(), api_main_go(blueprint)),
            GeneratedFile::new("api/routes/routes.go", routes_go(blueprint)),
            GeneratedFile::new("api/handlers/handlers.go", handlers_go()),
            GeneratedFile::new("api/middleware/middleware.go", middleware_go()),
        ]
    } else {
        vec![GeneratedFile::new(blueprint.entry_point(), main_go(blueprint))]
    }
}

/// README, ignore list and Makefile.
pub fn project_files(blueprint: &Blueprint) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("README.md", readme(blueprint)),
        GeneratedFile::new(".gitignore", gitignore()),
        GeneratedFile::new("Makefile", makefile(blueprint)),
    ]
}

pub fn main_go(blueprint: &Blueprint) -> String {
    let name = &blueprint.project_name;
    format!(
        r#"package main

import (
	"fmt"
)

func main() {{
	fmt.Println("Hello from {name}!")
}}
"#
    )
}

pub fn api_main_go(blueprint: &Blueprint) -> String {
    let module = &blueprint.module_name;
    format!(
        r#"package main

import (
	"fmt"
	"log"
	"net/http"

	"{module}/api/routes"
)

const healthPath = "{HEALTH_PATH}"

func main() {{
	// Initialize router
	router := routes.InitRoutes()

	// Start server
	port := ":{API_PORT}"
	fmt.Printf("Server starting on port %s...\n", port)
	fmt.Printf("Health check: http://localhost%s%s\n", port, healthPath)
	log.Fatal(http.ListenAndServe(port, router))
}}
"#
    )
}

pub fn routes_go(blueprint: &Blueprint) -> String {
    let module = &blueprint.module_name;
    format!(
        r#"package routes

import (
	"{ROUTER_MODULE}"
	"{module}/api/handlers"
)

// InitRoutes initializes the router and sets up routes
func InitRoutes() *mux.Router {{
	router := mux.NewRouter()

	// Define API routes
	router.HandleFunc("{HEALTH_PATH}", handlers.HealthCheckHandler).Methods("GET")

	// Add your routes here
	// router.HandleFunc("/api/resource", handlers.GetResourceHandler).Methods("GET")

	return router
}}
"#
    )
}

pub fn handlers_go() -> String {
    r#"package handlers

import (
	"encoding/json"
	"net/http"
)

// Response represents a standard API response
type Response struct {
	Status  string      `json:"status"`
	Message string      `json:"message,omitempty"`
	Data    interface{} `json:"data,omitempty"`
}

// HealthCheckHandler returns a 200 OK status when the API is available
func HealthCheckHandler(w http.ResponseWriter, r *http.Request) {
	response := Response{
		Status:  "success",
		Message: "API is up and running",
	}

	w.Header().Set("Content-Type", "application/json")
	w.WriteHeader(http.StatusOK)
	json.NewEncoder(w).Encode(response)
}
"#
    .to_string()
}

/// Request-timing logger. Written as a starting point; the router does not use it.
pub fn middleware_go() -> String {
    r#"package middleware

import (
	"net/http"
	"time"
)

// Logger is a middleware that logs request details
func Logger(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		start := time.Now()

		// Call the next handler
		next.ServeHTTP(w, r)

		// Log the request after handling it
		duration := time.Since(start)

		// You can use a proper logger here
		// log.Printf("%s %s %s %s", r.Method, r.RequestURI, r.RemoteAddr, duration)
		println(r.Method, r.RequestURI, duration.String())
	})
}
"#
    .to_string()
}

pub fn readme(blueprint: &Blueprint) -> String {
    let name = &blueprint.project_name;
    let module = &blueprint.module_name;
    let go_version = &blueprint.go_version;
    let entry = blueprint.entry_point();

    let api_section = if blueprint.is_rest_api() {
        format!(
            r#"
### API Endpoints

- GET {HEALTH_PATH} - Health check endpoint

### Running the API

```bash
go run {entry}
```

The API will be available at http://localhost:{API_PORT}
"#
        )
    } else {
        String::new()
    };

    format!(
        r#"# {name}

A Go project created with go-init.
{api_section}
## Getting Started

### Prerequisites

- Go {go_version} or higher

### Installation

```bash
go get {module}
```

## Usage

```bash
go run {entry}
```
"#
    )
}

pub fn gitignore() -> String {
    r#"# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with `go test -c`
*.test

# Output of the go coverage tool
*.out

# Go workspace file
go.work

# Dependency directories
vendor/

# IDEs
.idea/
.vscode/

# Environment files
.env
.env.local
"#
    .to_string()
}

pub fn makefile(blueprint: &Blueprint) -> String {
    let name = &blueprint.project_name;
    let entry = blueprint.entry_point();
    format!(
        ".PHONY: build clean test run

build:
\tgo build -o bin/{name} {entry}

test:
\tgo test ./...

clean:
\trm -rf bin/

run:
\tgo run {entry}
"
    )
}
