use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use vaultlink_core::PhysicalFileSystem;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_test_site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "content/public/index.md", "# Home\n\nStart at [[hello-world | the first post]].\n");
    write(
        root,
        "content/public/posts/hello-world.md",
        "---\ntitle: Hello World\n---\n![[cat.png]]\n\nRead [Dune](dune).\n",
    );
    write(root, "content/public/books/dune.md", "# Dune\n");
    write(root, "content/public/_assets/cat.png", "meow");
    write(root, "content/private/diary.md", "# Diary\n\n[[dune]]");
    temp_dir
}

#[test]
fn test_build_writes_pages_and_assets() {
    let temp_dir = create_test_site();
    let root = temp_dir.path();
    let output = root.join("_site");

    let summary = build_site(&SiteConfig::default(), root, &output, &PhysicalFileSystem).unwrap();
    assert_eq!(summary, BuildSummary { pages: 3, assets: 1 });

    let home = fs::read_to_string(output.join("index.html")).unwrap();
    assert!(home.contains("<title>Home</title>"));
    assert!(home.contains("<li><a href=\"/books/dune/\">Dune</a></li>"));
    assert!(home.contains("<a href=\"/posts/hello-world/\">the first post</a>"));

    let post = fs::read_to_string(output.join("posts/hello-world/index.html")).unwrap();
    assert!(post.contains("<a href=\"/books/dune/\">Dune</a>"));
    assert!(post.contains("src=\"/assets/cat.png\""));
    // The home page mentions `hello-world` in its raw text
    assert!(post.contains("<li><a href=\"/\">Home</a></li>"));

    let dune = fs::read_to_string(output.join("books/dune/index.html")).unwrap();
    assert!(dune.contains("<li><a href=\"/posts/hello-world/\">Hello World</a></li>"));
    assert!(!dune.contains("Diary"));

    assert_eq!(fs::read_to_string(output.join("assets/cat.png")).unwrap(), "meow");
    assert!(!output.join("diary").exists());
}

#[test]
fn test_link_graph() {
    let temp_dir = create_test_site();
    let collection = collect_site(&SiteConfig::default(), temp_dir.path(), &PhysicalFileSystem);

    let graph = link_graph(&collection);
    let urls: Vec<&str> = graph.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(urls, vec!["/books/dune/", "/", "/posts/hello-world/"]);

    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(json[0]["title"], "Dune");
    assert_eq!(json[0]["backlinks"][0]["url"], "/posts/hello-world/");
    assert_eq!(json[0]["backlinks"][0]["title"], "Hello World");
    // `index.md` at the source root has the empty slug, which every page contains
    assert_eq!(
        json[1]["backlinks"],
        serde_json::json!([
            {"url": "/books/dune/", "title": "Dune"},
            {"url": "/posts/hello-world/", "title": "Hello World"}
        ])
    );
}

#[test]
fn test_load_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let config = load_config(root, Path::new("vaultlink.yaml")).unwrap();
    assert_eq!(config.assets.url, "/assets");

    write(
        root,
        "site.yaml",
        "sources:\n  - name: notes\n    path: notes\nassets:\n  source: static\n  url: /static\noutput_dir: public\n",
    );
    let config = load_config(root, Path::new("site.yaml")).unwrap();
    assert_eq!(config.sources[0].path, PathBuf::from("notes"));
    assert_eq!(config.output_dir, PathBuf::from("public"));

    write(root, "broken.yaml", "sources: [");
    assert!(load_config(root, Path::new("broken.yaml")).is_err());
}

#[test]
fn test_cli_parsing() {
    use clap::Parser;

    let cli = Cli::parse_from(["vaultlink", "build", "--root", "site", "-o", "out"]);
    assert_eq!(cli.root, Some(PathBuf::from("site")));
    assert_eq!(cli.config, PathBuf::from("vaultlink.yaml"));
    assert!(matches!(
        cli.command,
        Commands::Build { output: Some(ref o) } if o == Path::new("out")
    ));

    let cli = Cli::parse_from(["vaultlink", "--verbose", "links"]);
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Links));
}
