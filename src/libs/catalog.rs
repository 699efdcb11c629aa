// The built-in tool catalog and the ordered install plan.
//
// The table is deliberately static data: updating a recommended version or
// adding a tool is an edit here, nothing else. The prompt order is a
// separate list so the walk order can differ from any natural grouping of
// the table; the plan builder dedupes it by first occurrence and silently
// drops names that are not in the catalog.

use crate::libs::error::InstallError;
use crate::schemas::catalog::{
    AptRepository, BinaryArtifact, CatalogEntry, ConnectionDefaults, Fallback, PackageName,
    RecommendedVersions,
};

const GENERIC_GUIDANCE: &str =
    "No automated fallback implemented. Recommend a manual or container-based install; see the official docs.";

const CLI_GUIDANCE: &str =
    "Consult the official docs or use the upstream binary installer (only package-manager attempts are automated).";

static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Git",
        description: "Distributed VCS",
        recommended: RecommendedVersions::per_os("2.34", "2.34", "2.34"),
        latest_note: Some("Latest upstream (example): 2.51.0."),
        package: Some(PackageName::Uniform("git")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(GENERIC_GUIDANCE),
    },
    CatalogEntry {
        name: "Jenkins",
        description: "Automation server (Jenkins)",
        recommended: RecommendedVersions::per_os(
            "2.462.3 (LTS)",
            "2.462.3 (LTS)",
            "2.462.3 (LTS)",
        ),
        latest_note: Some("Jenkins LTS baseline example: 2.462.3 (see jenkins.io)."),
        package: None,
        services: &["jenkins"],
        connection: Some(ConnectionDefaults {
            url: "http://localhost:8080",
            username: "admin",
            password: "<generated; see /var/lib/jenkins/secrets/initialAdminPassword>",
        }),
        fallback: Fallback::AptRepository(AptRepository {
            prerequisites: &[],
            key_url: "https://pkg.jenkins.io/debian-stable/jenkins.io.key",
            keyring_path: "/usr/share/keyrings/jenkins-keyring.asc",
            dearmor: false,
            sources_line: "deb [signed-by=/usr/share/keyrings/jenkins-keyring.asc] https://pkg.jenkins.io/debian-stable binary/",
            sources_path: "/etc/apt/sources.list.d/jenkins.list",
            packages: &["openjdk-17-jre", "jenkins"],
            other_os_package: None,
            post_note: "Jenkins installed. Default: http://localhost:8080 ; check /var/lib/jenkins/secrets/initialAdminPassword",
            guidance: "For macOS/Windows, use the native package or the official Docker image (recommended for dev).",
        }),
    },
    CatalogEntry {
        name: "Prometheus",
        description: "Monitoring TSDB & server",
        recommended: RecommendedVersions::per_os("2.54.0", "2.54.0", "2.54.0"),
        latest_note: Some("Prometheus upstream moved to v3.x in 2025; example latest: 3.6.0."),
        package: None,
        services: &["prometheus"],
        connection: None,
        fallback: Fallback::BinaryRelease(BinaryArtifact {
            tarball_url: "https://github.com/prometheus/prometheus/releases/download/v{version}/prometheus-{version}.linux-amd64.tar.gz",
            unpacked_dir: "prometheus-{version}.linux-amd64",
            binaries: &["prometheus", "promtool"],
        }),
    },
    CatalogEntry {
        name: "Terraform",
        description: "Infrastructure as Code",
        recommended: RecommendedVersions::per_os("1.8.0", "1.8.0", "1.8.0"),
        latest_note: Some("Terraform releases are fast; check HashiCorp for current."),
        package: Some(PackageName::Uniform("terraform")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "Ansible",
        description: "Configuration management",
        recommended: RecommendedVersions::per_os("2.14", "2.14", "2.14 (WSL recommended)"),
        latest_note: None,
        package: Some(PackageName::Uniform("ansible")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "Maven",
        description: "Java build tool",
        recommended: RecommendedVersions::per_os("3.8.8", "3.8.8", "3.8.8"),
        latest_note: None,
        package: Some(PackageName::Uniform("maven")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "Docker",
        description: "Container runtime/engine",
        recommended: RecommendedVersions::per_os(
            "20.10",
            "20.10 (Docker Desktop)",
            "20.10 (Docker Desktop)",
        ),
        latest_note: None,
        package: Some(PackageName::PerOs {
            linux: "docker.io",
            mac: "docker",
            windows: "docker",
        }),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(GENERIC_GUIDANCE),
    },
    CatalogEntry {
        name: "Kubernetes (kind/minikube/cluster)",
        description: "Kubernetes components",
        recommended: RecommendedVersions::per_os("1.27.x", "1.27.x", "1.27.x"),
        latest_note: None,
        package: None,
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(
            "Cluster bootstrap is not automated; use kind, minikube or kubeadm per the upstream docs.",
        ),
    },
    CatalogEntry {
        name: "Grafana",
        description: "Visualization",
        recommended: RecommendedVersions::per_os("11.1.4", "11.1.4", "11.1.4"),
        latest_note: None,
        package: None,
        services: &["grafana-server"],
        connection: Some(ConnectionDefaults {
            url: "http://localhost:3000",
            username: "admin",
            password: "admin",
        }),
        fallback: Fallback::AptRepository(AptRepository {
            prerequisites: &["apt-transport-https", "gnupg"],
            key_url: "https://packages.grafana.com/gpg.key",
            keyring_path: "/etc/apt/trusted.gpg.d/grafana.gpg",
            dearmor: true,
            sources_line: "deb https://packages.grafana.com/oss/deb stable main",
            sources_path: "/etc/apt/sources.list.d/grafana.list",
            packages: &["grafana"],
            other_os_package: Some("grafana"),
            post_note: "Grafana installed via apt. Start with: sudo systemctl enable --now grafana-server",
            guidance: "Download a Grafana package from grafana.com/download and install manually.",
        }),
    },
    CatalogEntry {
        name: "ELK",
        description: "Elasticsearch + Logstash + Kibana (Elastic Stack)",
        recommended: RecommendedVersions::per_os("8.15", "8.15", "8.15"),
        latest_note: None,
        package: None,
        services: &["elasticsearch", "kibana", "logstash"],
        connection: Some(ConnectionDefaults {
            url: "http://localhost:5601",
            username: "elastic",
            password: "changeme",
        }),
        fallback: Fallback::Guidance(
            "The Elastic Stack is not automated here (TLS, heap sizing and secrets need hand-holding). \
             Add the Elastic apt/yum repo and install elasticsearch, kibana and logstash manually, \
             or use the official Docker images.",
        ),
    },
    CatalogEntry {
        name: "Node Exporter",
        description: "Prometheus node exporter",
        recommended: RecommendedVersions::per_os("1.6.1", "1.6.1", "1.6.1"),
        latest_note: None,
        package: None,
        services: &["node_exporter"],
        connection: None,
        fallback: Fallback::BinaryRelease(BinaryArtifact {
            tarball_url: "https://github.com/prometheus/node_exporter/releases/download/v{version}/node_exporter-{version}.linux-amd64.tar.gz",
            unpacked_dir: "node_exporter-{version}.linux-amd64",
            binaries: &["node_exporter"],
        }),
    },
    CatalogEntry {
        name: "Alertmanager",
        description: "Prometheus Alertmanager",
        recommended: RecommendedVersions::per_os("0.24.0", "0.24.0", "0.24.0"),
        latest_note: None,
        package: None,
        services: &["alertmanager"],
        connection: None,
        fallback: Fallback::BinaryRelease(BinaryArtifact {
            tarball_url: "https://github.com/prometheus/alertmanager/releases/download/v{version}/alertmanager-{version}.linux-amd64.tar.gz",
            unpacked_dir: "alertmanager-{version}.linux-amd64",
            binaries: &["alertmanager", "amtool"],
        }),
    },
    CatalogEntry {
        name: "Pushgateway",
        description: "Prometheus Pushgateway",
        recommended: RecommendedVersions::per_os("1.5.1", "1.5.1", "1.5.1"),
        latest_note: None,
        package: None,
        services: &["pushgateway"],
        connection: None,
        fallback: Fallback::BinaryRelease(BinaryArtifact {
            tarball_url: "https://github.com/prometheus/pushgateway/releases/download/v{version}/pushgateway-{version}.linux-amd64.tar.gz",
            unpacked_dir: "pushgateway-{version}.linux-amd64",
            binaries: &["pushgateway"],
        }),
    },
    CatalogEntry {
        name: "Helm",
        description: "Kubernetes package manager",
        recommended: RecommendedVersions::any("v3.12.0"),
        latest_note: None,
        package: Some(PackageName::Uniform("helm")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "ArgoCD CLI",
        description: "Argo CD CLI",
        recommended: RecommendedVersions::any("v2.10.0"),
        latest_note: None,
        package: Some(PackageName::Uniform("argocd")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "kubectl",
        description: "Kubernetes CLI",
        recommended: RecommendedVersions::any("1.27.4"),
        latest_note: None,
        package: Some(PackageName::Uniform("kubectl")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "Azure CLI",
        description: "Azure CLI (az)",
        recommended: RecommendedVersions::any("2.69.0"),
        latest_note: None,
        package: Some(PackageName::Uniform("azure-cli")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "Minikube",
        description: "Local k8s",
        recommended: RecommendedVersions::any("1.30.0"),
        latest_note: None,
        package: Some(PackageName::Uniform("minikube")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "AWS CLI",
        description: "AWS CLI v2",
        recommended: RecommendedVersions::any("2.17.0"),
        latest_note: None,
        package: Some(PackageName::Uniform("awscli")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
    CatalogEntry {
        name: "Python",
        description: "Python runtime",
        recommended: RecommendedVersions::per_os("3.12.9", "3.12.9", "3.12.9"),
        latest_note: None,
        package: Some(PackageName::Uniform("python3")),
        services: &[],
        connection: None,
        fallback: Fallback::Guidance(CLI_GUIDANCE),
    },
];

/// Prompt order for the interactive walk. Servers and their exporters sit
/// together; CLIs trail at the end.
static PROMPT_ORDER: &[&str] = &[
    "Git",
    "Jenkins",
    "Prometheus",
    "Terraform",
    "Ansible",
    "Maven",
    "Docker",
    "Kubernetes (kind/minikube/cluster)",
    "Grafana",
    "ELK",
    "Node Exporter",
    "Alertmanager",
    "Pushgateway",
    "Helm",
    "ArgoCD CLI",
    "kubectl",
    "Azure CLI",
    "Minikube",
    "AWS CLI",
    "Python",
];

/// Read-only view over the built-in table.
pub struct Catalog {
    entries: &'static [CatalogEntry],
    order: &'static [&'static str],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            entries: CATALOG,
            order: PROMPT_ORDER,
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Lookup that treats a miss as the typed error the per-tool installer
    /// guards with.
    pub fn require(&self, name: &str) -> Result<&'static CatalogEntry, InstallError> {
        self.get(name)
            .ok_or_else(|| InstallError::UnsupportedTool(name.to_string()))
    }

    /// The deduplicated install plan: prompt order, first occurrence wins,
    /// names missing from the catalog are silently dropped.
    pub fn plan(&self) -> Vec<&'static CatalogEntry> {
        plan_from(self, self.order)
    }
}

fn plan_from(catalog: &Catalog, order: &[&str]) -> Vec<&'static CatalogEntry> {
    let mut seen: Vec<&str> = Vec::new();
    let mut plan = Vec::new();
    for &name in order {
        if seen.contains(&name) {
            continue;
        }
        if let Some(entry) = catalog.get(name) {
            plan.push(entry);
            seen.push(name);
        }
    }
    plan
}
