#![allow(dead_code)]

use odl_cfg_analysis::core::{ConfigProvider, DocumentSource, Storage};
use odl_cfg_analysis::{AnalysisError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const NETCONF_NS: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";
pub const CONFIG_NS: &str = "urn:opendaylight:params:xml:ns:yang:controller:config";
pub const NETTY_NS: &str = "urn:opendaylight:params:xml:ns:yang:controller:netty";
pub const NETTY_THREADGROUP_NS: &str = "urn:opendaylight:params:xml:ns:yang:controller:netty:threadgroup";
pub const NORTHBOUND_NS: &str = "urn:opendaylight:params:xml:ns:yang:controller:netconf:northbound:impl";

pub fn snapshot_xml(modules: &str, services: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<snapshot>
  <required-capabilities>
    <capability>urn:opendaylight:params:xml:ns:yang:controller:netty?module=netty&amp;revision=2013-11-19</capability>
  </required-capabilities>
  <configuration>
    <data xmlns="{NETCONF_NS}">
      <modules xmlns="{CONFIG_NS}">
{modules}
      </modules>
      <services xmlns="{CONFIG_NS}">
{services}
      </services>
    </data>
  </configuration>
</snapshot>
"#
    )
}

/// Netty thread group provider plus the service it backs.
pub fn netty_snapshot() -> String {
    snapshot_xml(
        &format!(
            r#"        <module>
          <type xmlns:netty="{NETTY_THREADGROUP_NS}">netty:netty-threadgroup-fixed</type>
          <name>global-boss-group</name>
        </module>
        <module>
          <type xmlns:netty="{NETTY_THREADGROUP_NS}">netty:netty-threadgroup-fixed</type>
          <name>global-worker-group</name>
        </module>"#
        ),
        &format!(
            r#"        <service>
          <type xmlns:netty="{NETTY_NS}">netty:netty-threadgroup</type>
          <instance>
            <name>global-boss-group</name>
            <provider>/modules/module[type='netty-threadgroup-fixed'][name='global-boss-group']</provider>
          </instance>
          <instance>
            <name>global-worker-group</name>
            <provider>/modules/module[type='netty-threadgroup-fixed'][name='global-worker-group']</provider>
          </instance>
        </service>"#
        ),
    )
}

/// Dispatcher depending on both netty groups and on a timer nobody provides.
pub fn dispatcher_snapshot() -> String {
    snapshot_xml(
        &format!(
            r#"        <module>
          <type xmlns:dispatcher="{NORTHBOUND_NS}">dispatcher:netconf-server-dispatcher-impl</type>
          <name>netconf-server-dispatcher</name>
          <boss-thread-group xmlns="{NORTHBOUND_NS}">
            <type xmlns:netty="{NETTY_NS}">netty:netty-threadgroup</type>
            <name>global-boss-group</name>
          </boss-thread-group>
          <worker-thread-group xmlns="{NORTHBOUND_NS}">
            <type xmlns:netty="{NETTY_NS}">netty:netty-threadgroup</type>
            <name>global-worker-group</name>
          </worker-thread-group>
          <timer xmlns="{NORTHBOUND_NS}">
            <type xmlns:netty="{NETTY_NS}">netty:netty-timer</type>
            <name>global-timer</name>
          </timer>
        </module>"#
        ),
        "",
    )
}

pub struct TestConfig {
    pub paths: Vec<String>,
    pub highlight: Vec<String>,
    pub format: String,
    pub dest: String,
}

impl TestConfig {
    pub fn new(paths: Vec<String>, format: &str) -> Self {
        Self {
            paths,
            highlight: Vec::new(),
            format: format.to_string(),
            dest: "dependencies".to_string(),
        }
    }

    pub fn highlighting(mut self, modules: &[&str]) -> Self {
        self.highlight = modules.iter().map(|m| m.to_string()).collect();
        self
    }
}

impl ConfigProvider for TestConfig {
    fn paths_to_analyze(&self) -> &[String] {
        &self.paths
    }

    fn highlight_modules(&self) -> &[String] {
        &self.highlight
    }

    fn graph_format(&self) -> &str {
        &self.format
    }

    fn graph_file_dest(&self) -> &str {
        &self.dest
    }
}

/// Documents keyed by location; a location maps to one document.
#[derive(Default)]
pub struct MemorySource {
    pub documents: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn with(mut self, name: &str, content: String) -> Self {
        self.documents.insert(name.to_string(), content);
        self
    }
}

impl DocumentSource for MemorySource {
    fn list_documents(&self, location: &Path) -> Result<Vec<PathBuf>> {
        let key = location.display().to_string();
        if self.documents.contains_key(&key) {
            Ok(vec![location.to_path_buf()])
        } else {
            Err(AnalysisError::InvalidInputPath { path: key })
        }
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        Ok(self.documents[&path.display().to_string()].clone())
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    pub files: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl Storage for MemoryStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        self.files.borrow_mut().insert(path.to_string(), data.to_vec());
        Ok(path.to_string())
    }
}

impl Storage for &MemoryStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        (**self).write_file(path, data)
    }
}
