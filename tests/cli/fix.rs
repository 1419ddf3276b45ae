use std::fs;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const ORDERS_PAGE: &str = r#"import { Table } from "antd";

export default function OrdersPage() {
  const [Orders, setOrders] = useState<Order[]>([]);

  useEffect(() => {
    api.get("/orders").then((response) => {
      setOrders(response.data.list);
    });
  }, []);

  return <Table rowKey="id" dataSource={Orders} columns={columns} />;
}
"#;

#[test]
fn test_fix_rewrites_then_rerun_is_clean() -> Result<()> {
    let test = CliTest::with_file("src/pages/Orders.tsx", ORDERS_PAGE)?;

    assert_cmd_snapshot!(test.fix_command());

    let content = test.read_file("src/pages/Orders.tsx")?;
    assert_eq!(
        content,
        ORDERS_PAGE.replace(
            "setOrders(response.data.list);",
            "setOrders(Array.isArray(response.data.list) ? response.data.list : []);"
        )
    );

    // Second run finds nothing and leaves the file alone.
    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("src/pages/Orders.tsx")?, content);
    Ok(())
}

#[test]
fn test_fix_all_kinds_for_one_variable() -> Result<()> {
    let test = CliTest::with_file(
        "src/pages/Items.tsx",
        r#"
if (paged) {
  setItems(response.data.list);
} else if (wrapped) {
  setItems(response.data.data);
} else {
  setItems(response.data);
}
<Table dataSource={Items} />
"#,
    )?;

    assert_cmd_snapshot!(test.fix_command());

    assert_eq!(
        test.read_file("src/pages/Items.tsx")?,
        r#"
if (paged) {
  setItems(Array.isArray(response.data.list) ? response.data.list : []);
} else if (wrapped) {
  setItems(Array.isArray(response.data.data) ? response.data.data : []);
} else {
  setItems(Array.isArray(response.data) ? response.data : []);
}
<Table dataSource={Items} />
"#
    );
    Ok(())
}

#[test]
fn test_fix_leaves_file_without_binding_untouched() -> Result<()> {
    let content = "export const load = () => setStats(response.data);\n";
    let test = CliTest::with_file("src/pages/Dashboard.tsx", content)?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("src/pages/Dashboard.tsx")?, content);
    Ok(())
}

#[test]
fn test_fix_does_not_write_safe_file() -> Result<()> {
    let content = r#"
setUsers(Array.isArray(response.data) ? response.data : []);
<Table dataSource={Users} />
"#;
    let test = CliTest::with_file("src/pages/Users.tsx", content)?;
    let path = test.root().join("src/pages/Users.tsx");
    let modified = fs::metadata(&path)?.modified()?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(fs::metadata(&path)?.modified()?, modified);
    assert_eq!(test.read_file("src/pages/Users.tsx")?, content);
    Ok(())
}

#[test]
fn test_fix_ignores_nested_directories_and_other_extensions() -> Result<()> {
    let unsafe_page = "setRows(response.data);\n<Table dataSource={Rows} />\n";
    let test = CliTest::new()?;
    test.write_file("src/pages/components/Rows.tsx", unsafe_page)?;
    test.write_file("src/pages/Rows.jsx", unsafe_page)?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("src/pages/components/Rows.tsx")?, unsafe_page);
    assert_eq!(test.read_file("src/pages/Rows.jsx")?, unsafe_page);
    Ok(())
}

#[test]
fn test_fix_source_root_override() -> Result<()> {
    let test = CliTest::with_file(
        "admin/Users.tsx",
        "setUsers(response.data);\n<Table dataSource={Users} />\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.args(["--source-root", "admin"]);
    assert_cmd_snapshot!(cmd);

    assert_eq!(
        test.read_file("admin/Users.tsx")?,
        "setUsers(Array.isArray(response.data) ? response.data : []);\n<Table dataSource={Users} />\n"
    );
    Ok(())
}

#[test]
fn test_fix_with_configured_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tablefixrc.json",
        r#"{
            "sourceRoot": "pages",
            "patterns": [
                {
                    "kind": "result-items",
                    "detect": "set{var}\\(res\\.items\\)",
                    "replace": "set{var}(Array.isArray(res.items) ? res.items : [])"
                }
            ]
        }"#,
    )?;
    test.write_file(
        "pages/Logs.tsx",
        "setLogs(res.items);\n<Table dataSource={Logs} />\n",
    )?;

    assert_cmd_snapshot!(test.fix_command());

    assert_eq!(
        test.read_file("pages/Logs.tsx")?,
        "setLogs(Array.isArray(res.items) ? res.items : []);\n<Table dataSource={Logs} />\n"
    );
    Ok(())
}

#[test]
fn test_fix_missing_source_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.fix_command());
    Ok(())
}

#[test]
fn test_fix_invalid_utf8_keeps_earlier_rewrites() -> Result<()> {
    let test = CliTest::with_file("src/pages/Orders.tsx", ORDERS_PAGE)?;
    fs::write(test.root().join("src/pages/Settings.tsx"), [0xc3, 0x28])?;

    insta::with_settings!({filters => vec![
        (r"invalid utf-8 sequence .*", "[UTF8_ERROR]"),
    ]}, {
        assert_cmd_snapshot!(test.fix_command());
    });

    // Orders.tsx sorts first and is rewritten before the run aborts.
    assert!(
        test.read_file("src/pages/Orders.tsx")?
            .contains("setOrders(Array.isArray(response.data.list) ? response.data.list : []);")
    );
    Ok(())
}
