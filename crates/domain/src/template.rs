// crates/domain/src/template.rs
//! The generated `package-info.java`.
//!
//! Downstream tooling parses this file, so the layout is reproduced byte for
//! byte: tab-indented license header, the generator marker, one annotation
//! line and the package declaration without a trailing newline.

use std::path::{Path, PathBuf};

use crate::metadata::BuildMetadata;

/// Location of the generated file relative to the source root.
pub const OUTPUT_RELATIVE_PATH: [&str; 7] =
    ["target", "gen", "org", "apache", "ranger", "common", "package-info.java"];

/// Name of the annotation carrying the metadata.
pub const ANNOTATION: &str = "RangerVersionAnnotation";

const LICENSE_HEADER: &str = concat!(
    "/*\n",
    "\t * Licensed to the Apache Software Foundation (ASF) under one\n",
    "\t * or more contributor license agreements.  See the NOTICE file\n",
    "\t * distributed with this work for additional information\n",
    "\t * regarding copyright ownership.  The ASF licenses this file\n",
    "\t * to you under the Apache License, Version 2.0 (the\n",
    "\t * \"License\"); you may not use this file except in compliance\n",
    "\t * with the License.  You may obtain a copy of the License at\n",
    "\t *\n",
    "\t *     http://www.apache.org/licenses/LICENSE-2.0\n",
    "\t *\n",
    "\t * Unless required by applicable law or agreed to in writing, software\n",
    "\t * distributed under the License is distributed on an \"AS IS\" BASIS,\n",
    "\t * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n",
    "\t * See the License for the specific language governing permissions and\n",
    "\t * limitations under the License.\n",
    "\t */\n",
);

const GENERATED_MARKER: &str = "\t /*\n\t * Generated by saveVersion.py\n\t */\n";

const PACKAGE_LINE: &str = "\t\t\t\t\t\t\tpackage org.apache.ranger.common;";

/// Default output path for a given source root.
pub fn default_output_path(source_root: &Path) -> PathBuf {
    OUTPUT_RELATIVE_PATH.iter().fold(source_root.to_path_buf(), |acc, part| acc.join(part))
}

/// The annotation line, without indentation or line ending.
pub fn annotation_line(meta: &BuildMetadata) -> String {
    format!(
        "@{ANNOTATION}(version=\"{}\", shortVersion=\"{}\",revision=\"{}\",branch=\"{}\", user=\"{}\",date=\"{}\", url=\"{}\",srcChecksum=\"{}\")",
        meta.version,
        meta.short_version,
        meta.revision,
        meta.branch,
        meta.user,
        meta.date,
        meta.url,
        meta.src_checksum
    )
}

/// Render the complete file.
pub fn render_package_info(meta: &BuildMetadata) -> String {
    let mut out = String::with_capacity(LICENSE_HEADER.len() + GENERATED_MARKER.len() + 512);
    out.push_str(LICENSE_HEADER);
    out.push_str(GENERATED_MARKER);
    out.push_str("\t ");
    out.push_str(&annotation_line(meta));
    out.push('\n');
    out.push_str(PACKAGE_LINE);
    out
}
