//! Basic example demonstrating the TestRail API client.
//!
//! Run with:
//! ```
//! TESTRAIL_USERNAME=you@example.com \
//! TESTRAIL_USER_API_KEY=your-key \
//! TESTRAIL_URL=https://example.testrail.net \
//! cargo run --example basic
//! ```

use railapi::TestRailClient;

#[tokio::main]
async fn main() -> railapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Resolve credentials from the environment / ~/.railapi.toml
    println!("Creating TestRail client...");
    let client = TestRailClient::from_env()?;
    println!("Connected to: {}", client.api().base_url());

    // List active projects
    println!("\n--- Listing Active Projects ---");
    let projects = client.projects(true, false).await?;
    println!("Found {} active projects", projects.len());

    for project in &projects {
        println!(
            "  - {} (id {})",
            project.name,
            project.id.map_or_else(|| "?".to_string(), |id| id.to_string())
        );
    }

    // Get a specific project (using the first one from the list)
    if let Some(id) = projects.iter().next().and_then(|p| p.id) {
        println!("\n--- Getting Project Details ---");
        let project = client.project(id).await?;
        println!("Project: {}", project.name);
        println!("  Suite mode: {:?}", project.suite_mode);
        println!("  Completed: {}", project.is_completed);

        // List the templates available in this project
        println!("\n--- Listing Templates ---");
        let templates = project.templates(&client).await?;
        for template in &templates {
            let marker = if template.is_default { " (default)" } else { "" };
            println!("  - {}{}", template.name, marker);
        }
    }

    // System tables
    println!("\n--- System Tables ---");
    let priorities = client.priorities().await?;
    println!("Priorities:");
    for priority in &priorities {
        println!(
            "  {}. {}",
            priority.priority,
            priority.short_name.as_deref().unwrap_or(&priority.name)
        );
    }

    let statuses = client.statuses().await?;
    println!("Statuses: {}", statuses.len());

    // Look up the current user by email
    println!("\n--- User Lookup ---");
    if let Ok(username) = std::env::var(railapi::ENV_USERNAME) {
        if username.contains('@') {
            let user = client.user(username.as_str()).await?;
            println!("You are: {} ({})", user.name, user.email);
        }
    }

    println!("\nDone!");
    Ok(())
}
