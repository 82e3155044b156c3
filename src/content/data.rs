use super::{Experience, Personal, Project, ProjectStatus, Site, Skill, Social};
use crate::nav::Section;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(title: &str, description: &str, tools: &[&str], status: ProjectStatus) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tools: strings(tools),
        github: "https://github.com/mrutyunjayma".to_string(),
        status,
    }
}

fn skills(category: &str, names: &[&str]) -> Vec<Skill> {
    names
        .iter()
        .map(|name| Skill {
            name: name.to_string(),
            category: category.to_string(),
        })
        .collect()
}

pub(super) fn builtin() -> Site {
    let personal = Personal {
        name: "Alex Rodriguez".into(),
        title: "DevOps Engineer".into(),
        subtitle: "DevOps Engineer & Cloud Architect".into(),
        description: "Passionate about automation, scalable infrastructure, and cloud-native \
                      technologies. I build robust CI/CD pipelines and architect resilient \
                      systems that scale with your business needs."
            .into(),
        email: "alex@example.com".into(),
        social: Social {
            github: "https://github.com".into(),
            linkedin: "https://linkedin.com".into(),
        },
        navigation: Section::ALL.to_vec(),
        copyright_year: 2025,
    };

    let projects = vec![
        project(
            "CI/CD Pipeline Automation",
            "Fully automated CI/CD pipeline using GitHub Actions, Docker, and Kubernetes with \
             multi-environment deployment strategies.",
            &["Docker", "Kubernetes", "GitHub Actions", "Terraform"],
            ProjectStatus::Production,
        ),
        project(
            "Infrastructure as Code",
            "Multi-cloud infrastructure provisioning using Terraform and Terragrunt with \
             automated security scanning and compliance.",
            &["Terraform", "AWS", "Azure", "Terragrunt"],
            ProjectStatus::Production,
        ),
        project(
            "Monitoring & Observability Stack",
            "Complete observability solution with Prometheus, Grafana, and ELK stack for \
             distributed systems monitoring.",
            &["Prometheus", "Grafana", "Elasticsearch", "Kibana"],
            ProjectStatus::Active,
        ),
        project(
            "Cloud-Native Microservices",
            "Scalable microservices architecture deployed on Kubernetes with service mesh and \
             automated scaling.",
            &["Kubernetes", "Istio", "Docker", "Helm"],
            ProjectStatus::Active,
        ),
    ];

    let skills = [
        skills("Cloud Platforms", &["AWS", "Azure", "Google Cloud"]),
        skills("Containers & Orchestration", &["Docker", "Kubernetes", "Helm"]),
        skills("CI/CD & Automation", &["GitHub Actions", "Jenkins", "ArgoCD"]),
        skills(
            "Infrastructure & Monitoring",
            &["Terraform", "Ansible", "Prometheus", "Grafana"],
        ),
    ]
    .concat();

    let experience = vec![
        Experience {
            role: "DevOps Engineer".into(),
            company: "Freelance".into(),
            period: "2025 - Present".into(),
            description: "Leading cloud-native transformation initiatives and building scalable \
                          CI/CD pipelines for microservices architecture."
                .into(),
            achievements: strings(&[
                "Reduced deployment time by 75%",
                "Implemented zero-downtime deployments",
                "Cost optimization saved $200k annually",
            ]),
        },
        Experience {
            role: "Modern Web Developer".into(),
            company: "Freelance".into(),
            period: "2024 - Present".into(),
            description: "Design and develop responsive, user-friendly websites and deploy them \
                          to production environments, delivering complete end-to-end solutions."
                .into(),
            achievements: strings(&[
                "Delivered 5+ client projects using React, Next.js, Tailwind, and Node.js/FastAPI",
                "Improved website performance to under 2-second load time",
                "Integrated modern CI/CD workflows for zero-downtime deployments",
                "Built reusable UI components and improved development speed by 30%",
            ]),
        },
    ];

    Site {
        personal,
        projects,
        skills,
        experience,
    }
}
