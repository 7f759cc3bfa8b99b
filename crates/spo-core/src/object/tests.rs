use super::*;
use crate::handle::RemoteItem;
use std::borrow::Cow;
use std::cell::{Cell, RefCell};

const CONTEXT: &str = "https://contoso.sharepoint.com/sites/teamsite";

fn item(kind: &str, identity: &str, server_relative_url: Option<&str>) -> RemoteItem {
    RemoteItem {
        kind: kind.to_string(),
        name: identity.rsplit('/').next().unwrap_or_default().to_string(),
        path_identity: identity.to_string(),
        server_relative_url: server_relative_url.map(str::to_string),
        context_url: CONTEXT.to_string(),
    }
}

/// Handle whose session URL can change underneath the object.
struct MutableSession {
    context_url: RefCell<String>,
    context_reads: Cell<usize>,
}

impl MutableSession {
    fn new(context_url: &str) -> Self {
        Self {
            context_url: RefCell::new(context_url.to_string()),
            context_reads: Cell::new(0),
        }
    }
}

impl ContentHandle for MutableSession {
    fn kind(&self) -> &str {
        "Folder"
    }

    fn name(&self) -> &str {
        "Shared Documents"
    }

    fn path_identity(&self) -> &str {
        "740c6a0b:folder:/sites/teamsite/Shared Documents"
    }

    fn server_relative_url(&self) -> Option<&str> {
        None
    }

    fn context_url(&self) -> Cow<'_, str> {
        self.context_reads.set(self.context_reads.get() + 1);
        Cow::Owned(self.context_url.borrow().clone())
    }
}

#[test]
fn file_kind_resolves_to_file() {
    let obj = SharePointObject::new(item("File", "id:file:/sites/teamsite/a.txt", None)).unwrap();
    assert_eq!(obj.object_type(), ObjectType::File);
}

#[test]
fn folder_kind_resolves_to_folder() {
    let obj =
        SharePointObject::new(item("Folder", "id:folder:/sites/teamsite/Docs", None)).unwrap();
    assert_eq!(obj.object_type(), ObjectType::Folder);
}

#[test]
fn other_kind_is_unsupported() {
    let err = SharePointObject::new(item("List", "id:/sites/teamsite/Lists/Tasks", None))
        .unwrap_err();
    assert_eq!(
        err,
        ObjectError::UnsupportedType {
            kind: "List".to_string()
        }
    );
}

#[test]
fn absent_handle_is_invalid_argument() {
    let err = SharePointObject::<RemoteItem>::from_optional(None).unwrap_err();
    assert_eq!(err, ObjectError::InvalidArgument);
}

#[test]
fn present_handle_via_from_optional() {
    let obj = SharePointObject::from_optional(Some(item(
        "File",
        "id:file:/sites/teamsite/a.txt",
        None,
    )))
    .unwrap();
    assert_eq!(obj.name(), "a.txt");
}

#[test]
fn host_and_site_from_context() {
    let obj = SharePointObject::new(item("File", "id:file:/sites/teamsite/a.txt", None)).unwrap();
    assert_eq!(obj.host_name(), "contoso.sharepoint.com");
    assert_eq!(obj.site_name(), "teamsite");
}

#[test]
fn paths_from_server_relative_url() {
    let url = "/sites/teamsite/Shared Documents/report.docx";
    let obj = SharePointObject::new(item("File", "id:file:/ignored", Some(url))).unwrap();
    assert_eq!(
        obj.host_path(),
        "https://contoso.sharepoint.com/sites/teamsite/Shared Documents/report.docx"
    );
    assert_eq!(obj.server_relative_path(), url);
    assert_eq!(obj.site_relative_path(), "Shared Documents/report.docx");
    assert_eq!(obj.parent(), "Shared Documents");
}

#[test]
fn paths_from_path_identity() {
    let obj = SharePointObject::new(item(
        "Folder",
        "740c6a0b:folder:/sites/teamsite/Shared Documents/2024",
        None,
    ))
    .unwrap();
    assert_eq!(
        obj.host_path(),
        "https://contoso.sharepoint.com/sites/teamsite/Shared Documents/2024"
    );
    assert_eq!(obj.site_relative_path(), "Shared Documents/2024");
    assert_eq!(obj.parent(), "Shared Documents");
}

#[test]
fn paths_from_nested_identity() {
    let obj = SharePointObject::new(item(
        "File",
        "id:file:/sites/teamsite/https://fabrikam.sharepoint.com/sites/hr/Policies/leave.pdf",
        None,
    ))
    .unwrap();
    assert_eq!(
        obj.host_path(),
        "https://fabrikam.sharepoint.com/sites/hr/Policies/leave.pdf"
    );
    assert_eq!(obj.server_relative_path(), "/sites/hr/Policies/leave.pdf");
    assert_eq!(obj.site_relative_path(), "Policies/leave.pdf");
    assert_eq!(obj.parent(), "Policies");
}

#[test]
fn file_at_site_root_has_empty_parent() {
    let obj = SharePointObject::new(item(
        "File",
        "id:file:/sites/teamsite/report.docx",
        None,
    ))
    .unwrap();
    assert_eq!(obj.site_relative_path(), "report.docx");
    assert_eq!(obj.parent(), "");
}

#[test]
fn host_name_is_memoized_across_context_changes() {
    let obj = SharePointObject::new(MutableSession::new(CONTEXT)).unwrap();
    assert_eq!(obj.host_name(), "contoso.sharepoint.com");

    *obj.handle().context_url.borrow_mut() = "https://fabrikam.sharepoint.com/sites/hr".to_string();
    assert_eq!(obj.host_name(), "contoso.sharepoint.com");
    // site_name was never read, so it sees the new session.
    assert_eq!(obj.site_name(), "hr");
}

#[test]
fn each_field_is_computed_once() {
    let obj = SharePointObject::new(MutableSession::new(CONTEXT)).unwrap();
    for _ in 0..3 {
        obj.parent();
        obj.site_name();
    }
    // One read for host_name (via host_path), one for site_name.
    assert_eq!(obj.handle().context_reads.get(), 2);
}

#[test]
fn rereads_return_identical_strings() {
    let obj = SharePointObject::new(item("File", "id:file:/sites/teamsite/a/b.txt", None)).unwrap();
    let first = obj.host_path();
    let second = obj.host_path();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(obj.parent(), obj.parent()));
}

#[test]
fn concurrent_first_reads_agree() {
    let obj = SharePointObject::new(item("File", "id:file:/sites/teamsite/a/b.txt", None)).unwrap();
    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| obj.site_relative_path().to_string()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| r == "a/b.txt"));
}

#[test]
fn custom_rules_drive_nested_detection() {
    let rules = Arc::new(PathRules::new(["sharepoint.us"]).unwrap());
    let obj = SharePointObject::with_rules(
        item(
            "File",
            "id:file:/sites/teamsite/https://agency.sharepoint.us/sites/ops/x.txt",
            None,
        ),
        rules,
    )
    .unwrap();
    assert_eq!(obj.host_path(), "https://agency.sharepoint.us/sites/ops/x.txt");
    assert_eq!(obj.rules().nested_host_suffixes(), ["sharepoint.us"]);
}

#[test]
fn snapshot_contains_every_field() {
    let obj = SharePointObject::new(item(
        "File",
        "id:file:/x",
        Some("/sites/teamsite/Shared Documents/report.docx"),
    ))
    .unwrap();
    let snap = obj.snapshot();
    assert_eq!(snap.object_type, ObjectType::File);
    assert_eq!(snap.name, "x");
    assert_eq!(snap.host_name, "contoso.sharepoint.com");
    assert_eq!(snap.site_name, "teamsite");
    assert_eq!(snap.parent, "Shared Documents");

    let json: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
    assert_eq!(json["type"], "File");
    assert_eq!(json["serverRelativePath"], "/sites/teamsite/Shared Documents/report.docx");
    assert_eq!(json["siteRelativePath"], "Shared Documents/report.docx");
}

#[test]
fn into_handle_returns_original() {
    let original = item("File", "id:file:/sites/teamsite/a.txt", None);
    let obj = SharePointObject::new(original.clone()).unwrap();
    assert_eq!(obj.into_handle(), original);
}
