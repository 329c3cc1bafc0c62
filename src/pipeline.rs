//! Generation pipeline orchestration for Forge.
//! Sequences skeleton creation, descriptor rendering, the two external
//! build passes, per-application template rendering and the final
//! directory reconciliation.
//!
//! Stages run strictly in order and the first failure aborts the whole
//! run. Already-written files are not rolled back; re-running the
//! pipeline overwrites them, which is the documented recovery path.

use crate::build::BuildInvoker;
use crate::constants::{SERVICE_DESCRIPTOR_FILE, SERVICE_DESCRIPTOR_TEMPLATE, TEMPLATE_PREFIX};
use crate::context::build_context;
use crate::error::{Error, Result};
use crate::generator::render_template;
use crate::naming;
use crate::renderer::TemplateRenderer;
use crate::resolver::{resolve_templates, TemplateDescriptor};
use crate::spec::Spec;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Module directory suffixes generated for every project: the service/API
/// tier and the presentation tier.
const MODULE_SUFFIXES: [&str; 3] = ["api", "service", "web"];

/// Orchestrates one end-to-end generation run.
pub struct Pipeline<'a> {
    engine: &'a dyn TemplateRenderer,
    invoker: &'a dyn BuildInvoker,
    templates_root: PathBuf,
    dest_root: PathBuf,
    author: String,
    task: String,
}

impl<'a> Pipeline<'a> {
    /// Creates a new Pipeline instance.
    ///
    /// # Arguments
    /// * `engine` - Template rendering engine
    /// * `invoker` - External build tool invoker
    /// * `templates_root` - Root directory of version-specific template sets
    /// * `dest_root` - Destination root for the generated project
    /// * `author` - Author exposed to templates
    /// * `task` - Build tool task that materializes the service tier
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        invoker: &'a dyn BuildInvoker,
        templates_root: PathBuf,
        dest_root: PathBuf,
        author: String,
        task: String,
    ) -> Self {
        Self { engine, invoker, templates_root, dest_root, author, task }
    }

    /// Computes the service descriptor path inside the generated skeleton.
    pub fn service_descriptor_path(dest_root: &Path, project_name: &str) -> PathBuf {
        dest_root
            .join(project_name)
            .join(format!("{}-service", project_name))
            .join(SERVICE_DESCRIPTOR_FILE)
    }

    /// Runs the full generation pipeline for the given specification.
    ///
    /// # Flow
    /// 1. Create the project module skeleton
    /// 2. Render the service descriptor (project-level, no application)
    /// 3. Run the build task to generate the service tier
    /// 4. Render every resolved template for every application entry
    /// 5. Run the build task again to pick up the rendered scaffolding
    /// 6. Merge the nested project directory into the destination root
    ///
    /// A failure on any single template aborts the entire run rather than
    /// skipping it.
    pub fn run(&self, spec: &Spec) -> Result<()> {
        let project_name = naming::to_dash_case(&spec.project_name)?;
        let descriptor_path = Self::service_descriptor_path(&self.dest_root, &project_name);

        // Resolve up front so a missing template set fails the run before
        // any filesystem side effect.
        let templates =
            resolve_templates(&self.templates_root, &spec.platform_version, TEMPLATE_PREFIX)?;

        println!("Generating {0}-api, {0}-service, {0}-web skeletons", project_name);
        self.generate_skeleton(&project_name)?;

        println!("Rendering service descriptor at '{}'", descriptor_path.display());
        self.render_service_descriptor(spec, &descriptor_path)?;

        println!("Running '{}' to generate the service tier", self.task);
        self.invoker.invoke(&descriptor_path, &self.task)?;

        for app in &spec.applications {
            print!("Rendering templates for '{}'", app.name);
            for descriptor in &templates {
                print!(".");
                let _ = std::io::stdout().flush();
                let context = build_context(spec, Some(app), None, &self.author);
                render_template(self.engine, descriptor, &context, &self.dest_root)?;
            }
            println!();
        }

        println!("Running '{}' again to pick up the rendered scaffolding", self.task);
        self.invoker.invoke(&descriptor_path, &self.task)?;

        println!("Merging generated modules into '{}'", self.dest_root.display());
        crate::reconciler::reconcile(&self.dest_root.join(&project_name), &self.dest_root)?;

        Ok(())
    }

    /// Creates the project's module directory structure.
    fn generate_skeleton(&self, project_name: &str) -> Result<()> {
        for suffix in MODULE_SUFFIXES {
            let module_dir = self
                .dest_root
                .join(project_name)
                .join(format!("{}-{}", project_name, suffix));
            fs::create_dir_all(module_dir).map_err(Error::IoError)?;
        }
        Ok(())
    }

    /// Renders the service descriptor template with no application in
    /// context and an explicit output path inside the skeleton.
    fn render_service_descriptor(&self, spec: &Spec, descriptor_path: &Path) -> Result<()> {
        let source = self
            .templates_root
            .join(&spec.platform_version)
            .join(SERVICE_DESCRIPTOR_TEMPLATE);
        if !source.is_file() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: source.display().to_string(),
            });
        }

        let descriptor = TemplateDescriptor::explicit(
            SERVICE_DESCRIPTOR_TEMPLATE,
            source,
            descriptor_path.to_path_buf(),
        );
        let context = build_context(spec, None, Some(descriptor_path), &self.author);
        render_template(self.engine, &descriptor, &context, &self.dest_root)?;
        Ok(())
    }
}
