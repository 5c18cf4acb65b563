use std::fs;
use std::path::Path;

use pagebuild::pages::read_pages;
use speculate2::speculate;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(path, content).expect("Failed to write file");
}

speculate! {
    before {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let root = tmp.path();
    }

    describe "read_pages" {
        it "loads only htm and html files" {
            write(root, "index.html", "<h1>home</h1>");
            write(root, "legacy.htm", "<h1>legacy</h1>");
            write(root, "styles.css", "body {}");
            write(root, "app.js", "1;");

            let pages = read_pages(root, &[]).expect("read failed");
            assert_eq!(pages.len(), 2);
            assert!(pages.get("index").is_some());
            assert!(pages.get("legacy.htm").is_some());
        }

        it "loads pages from subdirectories with changed unset" {
            write(root, "sub/about.html", "<p>about</p>");

            let pages = read_pages(root, &[]).expect("read failed");
            let page = pages.get("about").expect("page should exist");
            assert_eq!(page.data, "<p>about</p>");
            assert!(!page.changed);
        }

        it "respects the exclusion set" {
            write(root, "pages/index.html", "x");
            write(root, "build/index.html", "x");

            let exclude = vec!["build".to_string()];
            let pages = read_pages(root, &exclude).expect("read failed");
            assert_eq!(pages.len(), 1);
        }
    }

    describe "lookup" {
        it "matches with and without the .html suffix" {
            write(root, "contact.html", "x");

            let pages = read_pages(root, &[]).expect("read failed");
            assert!(pages.get("contact").is_some());
            assert!(pages.get("contact.html").is_some());
            assert!(pages.get("contact.htm").is_none());
        }
    }

    describe "write_changed" {
        it "persists only flagged records and reports the count" {
            write(root, "one.html", "<p>one</p>");
            write(root, "two.html", "<p>two</p>");
            write(root, "three.html", "<p>three</p>");

            let mut pages = read_pages(root, &[]).expect("read failed");
            pages
                .get_mut("one")
                .expect("page should exist")
                .set_data("<p>ONE</p>");
            pages
                .get_mut("two")
                .expect("page should exist")
                .replace("two", "TWO");

            let count = pages.write_changed().expect("flush failed");
            assert_eq!(count, 2);
            assert_eq!(
                fs::read_to_string(root.join("one.html")).expect("read failed"),
                "<p>ONE</p>"
            );
            assert_eq!(
                fs::read_to_string(root.join("two.html")).expect("read failed"),
                "<p>TWO</p>"
            );
            assert_eq!(
                fs::read_to_string(root.join("three.html")).expect("read failed"),
                "<p>three</p>"
            );
        }

        it "writes nothing when no record changed" {
            write(root, "one.html", "<p>one</p>");

            let pages = read_pages(root, &[]).expect("read failed");
            let count = pages.write_changed().expect("flush failed");
            assert_eq!(count, 0);
        }

        it "does not flag a record when set_data stores identical content" {
            write(root, "one.html", "<p>one</p>");

            let mut pages = read_pages(root, &[]).expect("read failed");
            pages
                .get_mut("one")
                .expect("page should exist")
                .set_data("<p>one</p>");

            let count = pages.write_changed().expect("flush failed");
            assert_eq!(count, 0);
        }
    }
}
