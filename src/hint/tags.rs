//! Built-in compose hint tags

use super::Severity;

/// A statically defined hint tag
#[derive(Debug, Clone, Copy)]
pub struct HintTagDef {
    pub tag: &'static str,
    pub severity: Severity,
    pub explanation: &'static str,
}

const fn def(tag: &'static str, severity: Severity, explanation: &'static str) -> HintTagDef {
    HintTagDef {
        tag,
        severity,
        explanation,
    }
}

/// Prefix for tags translated from validator issues
pub const VALIDATOR_TAG_PREFIX: &str = "asv-";

/// Hint tags raised by the compose core itself
pub const COMPOSE_HINT_TAGS: &[HintTagDef] = &[
    def(
        "internal-unknown-tag",
        Severity::Error,
        "The given tag was unknown. Please file an issue against AppStream.",
    ),
    def(
        "internal-error",
        Severity::Error,
        "A fatal problem appeared in appstream-compose. Please file an issue against AppStream.<br/>Error: {{msg}}",
    ),
    def(
        "x-dev-testsuite-error",
        Severity::Error,
        "Dummy error hint for the testsuite. Var1: {{var1}}.",
    ),
    def(
        "x-dev-testsuite-info",
        Severity::Info,
        "Dummy info hint for the testsuite. Var1: {{var1}}.",
    ),
    def(
        "unit-read-error",
        Severity::Error,
        "Error while reading data from unit <code>{{name}}</code>: {{msg}}",
    ),
    def(
        "ancient-metadata",
        Severity::Warning,
        "The AppStream metadata should be updated to follow a more recent version of the specification.<br/>\
         Please consult <a href=\"http://freedesktop.org/software/appstream/docs/chap-Quickstart.html\">the XML quickstart guide</a> \
         for more information.",
    ),
    def(
        "metainfo-parsing-error",
        Severity::Error,
        "Unable to parse AppStream MetaInfo file <code>{{fname}}</code>, the data is likely malformed.<br/>Error: {{error}}",
    ),
    def(
        "metainfo-no-id",
        Severity::Error,
        "Could not determine an ID for the component in <code>{{fname}}</code>. The AppStream MetaInfo file likely lacks an \
         <code>&lt;id/&gt;</code> tag.<br/>The identifier tag is essential for AppStream metadata, and must not be missing.",
    ),
    def(
        "metainfo-no-name",
        Severity::Error,
        "Component has no name specified. Ensure that the AppStream MetaInfo file or the .desktop file (if there is any) \
         specify a component name.",
    ),
    def(
        "metainfo-no-summary",
        Severity::Error,
        "Component does not contain a short summary. Ensure that the components MetaInfo file has a <code>summary</code> tag, \
         or that its .desktop file has a <code>Comment=</code> field set.",
    ),
    def(
        "metainfo-license-invalid",
        Severity::Error,
        "The MetaInfo file does not seem to be licensed under a permissive license that is in the allowed set for AppStream metadata. \
         Valid permissive licenses include FSFAP, CC0-1.0 or MIT. Using one of the vetted permissive licenses is required to allow \
         distributors to include the metadata in mixed data collections without the risk of license violations due to mixing \
         incompatible licenses. Refer to \
         <a href=\"https://www.freedesktop.org/software/appstream/docs/chap-Metadata.html#tag-metadata_license\">the specification documentation</a> \
         for information on how to make '{{license}}' a valid expression, or consider replacing the license with one of the \
         recognized licenses directly.",
    ),
    def(
        "metainfo-unknown-type",
        Severity::Error,
        "The component has an unknown type. Please make sure this component type is mentioned in the specification, and that the \
         <code>type=</code> property of the component root-node in the MetaInfo XML file does not contain a spelling mistake.",
    ),
    def(
        "metainfo-releases-download-failed",
        Severity::Warning,
        "Unable to download release information from <code>{{url}}</code>. The error message was: {{msg}}.",
    ),
    def(
        "metainfo-releases-read-failed",
        Severity::Error,
        "Unable to read release information from <code>{{path}}</code>. The error message was: {{msg}}.",
    ),
    def(
        "file-read-error",
        Severity::Error,
        "Unable to read data from file <code>{{fname}}</code>: {{msg}}",
    ),
    def(
        "desktop-file-error",
        Severity::Error,
        "Unable to read data from .desktop file: {{msg}}",
    ),
    def(
        "desktop-entry-hidden-set",
        Severity::Warning,
        "The desktop-entry file `{{location}}` has the 'Hidden' property set. This is wrong for vendor-installed .desktop files, \
         and nullifies all effects this .desktop file has (including MIME associations), which most certainly is not intentional. \
         See <a href=\"https://standards.freedesktop.org/desktop-entry-spec/latest/ar01s06.html\">the specification</a> for details.",
    ),
    def(
        "desktop-entry-empty-onlyshowin",
        Severity::Warning,
        "The desktop-entry file `{{location}}` has the 'OnlyShowIn' property set with an empty value. This might not be intended, \
         as this will hide the application from all desktops. If you do want to hide the application from all desktops, using \
         'NoDisplay=true' is more explicit. \
         See <a href=\"https://standards.freedesktop.org/desktop-entry-spec/latest/ar01s06.html\">the specification</a> for details.",
    ),
    def(
        "missing-launchable-desktop-file",
        Severity::Warning,
        "The MetaInfo file references a .desktop file with ID '{{desktop_id}}' in its <code>launchable</code> tag, but the file \
         was not found in the same source tree. In order to be able to launch the software once it was installed, please place \
         the MetaInfo file and its .desktop files in the same package.",
    ),
    def(
        "translation-status-error",
        Severity::Warning,
        "Unable to read translation status data: {{msg}}",
    ),
    def(
        "icon-not-found",
        Severity::Error,
        "The icon <em>{{icon_fname}}</em> was not found in the archive. This issue can have multiple reasons, like the icon being \
         in a wrong directory or not being available in a suitable size (at least 64x64px).",
    ),
    def(
        "no-stock-icon",
        Severity::Error,
        "The component has no stock icon set, even though it requires one (or a `local` icon) to be valid.",
    ),
    def(
        "icon-write-error",
        Severity::Error,
        "Unable to store icon <code>{{fname}}</code>: {{msg}}",
    ),
    def(
        "duplicate-component",
        Severity::Error,
        "A component with this ID already exists. AppStream IDs must be unique, any subsequent components have been ignored. \
         Please resolve the ID conflict!",
    ),
    def(
        "gui-app-without-icon",
        Severity::Error,
        "The component is a GUI application (application which has a .desktop file for the XDG menu and \
         <code>Type=Application</code>), but we could not find a matching icon for this application.",
    ),
    def(
        "web-app-without-icon",
        Severity::Error,
        "The component is a GUI web application, but it either has no icon set in its MetaInfo file, or we could not find a \
         matching icon for this application.",
    ),
    def(
        "os-without-icon",
        Severity::Info,
        "The component is an operating system, but no icon was found for it. Setting an icon would improve the look of this \
         component in GUIs.",
    ),
    def(
        "no-valid-category",
        Severity::Error,
        "This software component is no member of any valid category.",
    ),
    def(
        "description-missing",
        Severity::Error,
        "Software components of type '{{kind}}' require a long description, and we were unable to find one. \
         Please add one via a MetaInfo file.",
    ),
    def(
        "no-metainfo",
        Severity::Warning,
        "This software component is missing a \
         <a href=\"https://freedesktop.org/software/appstream/docs/chap-Metadata.html#sect-Metadata-GenericComponent\">MetaInfo file</a> \
         as metadata source.<br/>To synthesize suitable metadata anyway, we took some data from its desktop-entry file.<br/>\
         Please consider to either hide this .desktop file from AppStream by adding a <code>X-AppStream-Ignore=true</code> field \
         to it, or to write a MetaInfo file for this component.",
    ),
    def(
        "filters-but-no-output",
        Severity::Error,
        "Component filters were set, but no output was generated at all. Likely none of the filtered components were found, \
         try to relax the filters and ensure the input data is valid.",
    ),
];
