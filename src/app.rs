// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::IsTerminal;

use console::style;
use dialoguer::{Confirm, Input, Password, Select};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::services::{accounts, catalog, fleet, social};

pub struct App {
    cli: Cli,
    config: Config,
    registry: Registry,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            min_password_len = config.min_password_len,
            id_len = config.id_len,
            "config loaded"
        );
        Ok(Self {
            cli,
            config,
            registry: Registry::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        match self.cli.command.take() {
            Some(Commands::Init) => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Some(Commands::Config) => {
                println!("min_password_len: {}", self.config.min_password_len);
                println!("id_len: {}", self.config.id_len);
                println!("demo_people: {}", self.config.demo_people);
                if let Some(path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    println!("config file: {} ({})", path.display(), status);
                }
                Ok(())
            }
            Some(Commands::Demo { json }) => self.run_demo(json),
            Some(Commands::Completions { shell }) => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(shell, &mut cmd, "rolapet", &mut std::io::stdout());
                Ok(())
            }
            None => self.shell(),
        }
    }

    // ─── Interactive Console ───

    fn shell(&mut self) -> Result<()> {
        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        if !is_interactive {
            self.print_warning("Not a terminal. The interactive console needs a TTY.");
            self.print_info("Try `rolapet demo` for a non-interactive tour.");
            return Ok(());
        }

        eprintln!("{}", style("RolaPet registration console").bold());
        self.print_info("Everything lives in memory; data is gone when you quit.");

        loop {
            let choice = Select::new()
                .with_prompt("Main menu")
                .items(&["Register", "Log in", "Directory stats", "Quit"])
                .default(0)
                .interact()?;

            let outcome = match choice {
                0 => self.register_flow(),
                1 => self.login_flow(),
                2 => {
                    println!("{}", self.registry.stats());
                    Ok(())
                }
                _ => break,
            };
            if let Err(e) = outcome {
                self.report(&e);
            }
        }

        Ok(())
    }

    fn register_flow(&mut self) -> Result<()> {
        let role = Select::new()
            .with_prompt("Register as")
            .items(&["User", "Admin", "Provider", "Back"])
            .default(0)
            .interact()?;
        if role == 3 {
            return Ok(());
        }

        let cedula: String = Input::new().with_prompt("Cedula").interact_text()?;
        let name: String = Input::new().with_prompt("Full name").interact_text()?;
        let phone: String = Input::new().with_prompt("Phone").interact_text()?;
        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        match role {
            0 => accounts::register_user(
                &mut self.registry,
                &self.config,
                &cedula,
                &name,
                &phone,
                &password,
                &email,
            )?,
            1 => accounts::register_admin(
                &mut self.registry,
                &self.config,
                &cedula,
                &name,
                &phone,
                &password,
                &email,
            )?,
            _ => accounts::register_provider(
                &mut self.registry,
                &self.config,
                &cedula,
                &name,
                &phone,
                &password,
                &email,
            )?,
        }

        self.print_status("Registered. You can log in now.");
        Ok(())
    }

    fn login_flow(&mut self) -> Result<()> {
        let role = Select::new()
            .with_prompt("Log in as")
            .items(&["User", "Admin", "Provider", "Back"])
            .default(0)
            .interact()?;
        if role == 3 {
            return Ok(());
        }

        let password_prompt = Password::new().with_prompt("Password");
        let (cedula, name) = match role {
            0 => {
                let email: String = Input::new().with_prompt("Email").interact_text()?;
                let password = password_prompt.interact()?;
                let person = accounts::authenticate_user(&self.registry, &email, &password)?;
                (person.cedula.clone(), person.name.clone())
            }
            _ => {
                let cedula: String = Input::new().with_prompt("Cedula").interact_text()?;
                let password = password_prompt.interact()?;
                let person = if role == 1 {
                    accounts::authenticate_admin(&self.registry, &cedula, &password)?
                } else {
                    accounts::authenticate_provider(&self.registry, &cedula, &password)?
                };
                (person.cedula.clone(), person.name.clone())
            }
        };

        self.print_status(&format!("Welcome, {}.", name));
        match role {
            0 => self.user_dashboard(&cedula),
            1 => self.admin_dashboard(),
            _ => self.provider_dashboard(&cedula),
        }
    }

    fn user_dashboard(&mut self, cedula: &str) -> Result<()> {
        loop {
            let choice = Select::new()
                .with_prompt("User dashboard")
                .items(&[
                    "My vehicles",
                    "Add vehicle",
                    "Remove vehicle",
                    "My friends",
                    "Add friend",
                    "Remove friend",
                    "Log out",
                ])
                .default(0)
                .interact()?;

            let outcome = match choice {
                0 => self.list_own_vehicles(cedula),
                1 => self.add_vehicle_flow(cedula),
                2 => self.remove_vehicle_flow(cedula),
                3 => self.list_friends(cedula),
                4 => self.add_friend_flow(cedula),
                5 => self.remove_friend_flow(cedula),
                _ => break,
            };
            if let Err(e) = outcome {
                self.report(&e);
            }
        }
        Ok(())
    }

    fn list_own_vehicles(&self, cedula: &str) -> Result<()> {
        let vehicles = fleet::vehicles_of(&self.registry, cedula)?;
        if vehicles.is_empty() {
            self.print_info("No vehicles yet.");
            return Ok(());
        }
        for vehicle in vehicles {
            println!("  {}", vehicle);
        }
        Ok(())
    }

    fn add_vehicle_flow(&mut self, cedula: &str) -> Result<()> {
        let brand: String = Input::new().with_prompt("Brand").interact_text()?;
        let model: String = Input::new().with_prompt("Model").interact_text()?;
        let range_km: u32 = Input::new().with_prompt("Range (km)").interact_text()?;
        let kind_idx = Select::new()
            .with_prompt("Kind")
            .items(&["Scooter", "Electric motorcycle"])
            .default(0)
            .interact()?;
        let kind = if kind_idx == 0 {
            "scooter"
        } else {
            "electric motorcycle"
        };

        let id = fleet::register_vehicle(
            &mut self.registry,
            &self.config,
            cedula,
            &brand,
            &model,
            range_km,
            kind,
        )?;
        self.print_status(&format!("Vehicle {} registered.", id));
        Ok(())
    }

    fn remove_vehicle_flow(&mut self, cedula: &str) -> Result<()> {
        let id: String = Input::new().with_prompt("Vehicle id").interact_text()?;
        let confirm = Confirm::new()
            .with_prompt(format!("Remove vehicle {}?", id))
            .default(false)
            .interact()?;
        if !confirm {
            return Ok(());
        }
        fleet::detach_vehicle(&mut self.registry, cedula, &id)?;
        self.print_status("Vehicle removed.");
        Ok(())
    }

    fn list_friends(&self, cedula: &str) -> Result<()> {
        let friends = social::friends_of(&self.registry, cedula)?;
        if friends.is_empty() {
            self.print_info("No friends yet.");
            return Ok(());
        }
        for friend in friends {
            println!("  {}", friend);
        }
        Ok(())
    }

    fn add_friend_flow(&mut self, cedula: &str) -> Result<()> {
        let friend: String = Input::new().with_prompt("Friend's cedula").interact_text()?;
        social::add_friend(&mut self.registry, cedula, &friend)?;
        self.print_status("Friend added.");
        Ok(())
    }

    fn remove_friend_flow(&mut self, cedula: &str) -> Result<()> {
        let friend: String = Input::new().with_prompt("Friend's cedula").interact_text()?;
        social::remove_friend(&mut self.registry, cedula, &friend)?;
        self.print_status("Friend removed.");
        Ok(())
    }

    fn provider_dashboard(&mut self, cedula: &str) -> Result<()> {
        loop {
            let choice = Select::new()
                .with_prompt("Provider dashboard")
                .items(&[
                    "My catalog",
                    "Offer item",
                    "My posts",
                    "Publish post",
                    "Log out",
                ])
                .default(0)
                .interact()?;

            let outcome = match choice {
                0 => self.list_catalog(cedula),
                1 => self.offer_item_flow(cedula),
                2 => self.list_posts(cedula),
                3 => self.publish_post_flow(cedula),
                _ => break,
            };
            if let Err(e) = outcome {
                self.report(&e);
            }
        }
        Ok(())
    }

    fn list_catalog(&self, cedula: &str) -> Result<()> {
        let items = catalog::items_of(&self.registry, cedula)?;
        if items.is_empty() {
            self.print_info("Catalog is empty.");
            return Ok(());
        }
        for item in items {
            println!("  {}", item);
        }
        Ok(())
    }

    fn offer_item_flow(&mut self, cedula: &str) -> Result<()> {
        let name: String = Input::new().with_prompt("Name").interact_text()?;
        let description: String = Input::new().with_prompt("Description").interact_text()?;
        let kind_idx = Select::new()
            .with_prompt("Kind")
            .items(&["Service", "Product"])
            .default(0)
            .interact()?;
        let kind = if kind_idx == 0 { "service" } else { "product" };

        let id = catalog::offer_item(
            &mut self.registry,
            &self.config,
            cedula,
            &name,
            &description,
            kind,
        )?;
        self.print_status(&format!("Item {} added to your catalog.", id));
        Ok(())
    }

    fn list_posts(&self, cedula: &str) -> Result<()> {
        let posts = catalog::posts_of(&self.registry, cedula)?;
        if posts.is_empty() {
            self.print_info("No posts yet.");
            return Ok(());
        }
        for post in posts {
            println!("  {}", post);
        }
        Ok(())
    }

    fn publish_post_flow(&mut self, cedula: &str) -> Result<()> {
        let title: String = Input::new().with_prompt("Title").interact_text()?;
        let description: String = Input::new().with_prompt("Description").interact_text()?;
        let kind_idx = Select::new()
            .with_prompt("Kind")
            .items(&["Event", "Promotion"])
            .default(0)
            .interact()?;
        let kind = if kind_idx == 0 { "event" } else { "promotion" };

        let id = catalog::publish_post(
            &mut self.registry,
            &self.config,
            cedula,
            &title,
            &description,
            kind,
        )?;
        self.print_status(&format!("Post {} published.", id));
        Ok(())
    }

    fn admin_dashboard(&mut self) -> Result<()> {
        loop {
            let choice = Select::new()
                .with_prompt("Admin dashboard")
                .items(&[
                    "People",
                    "Vehicles",
                    "Items",
                    "Posts",
                    "Stats",
                    "Remove person",
                    "Log out",
                ])
                .default(0)
                .interact()?;

            let outcome = match choice {
                0 => {
                    Self::print_listing(self.registry.people().iter());
                    Ok(())
                }
                1 => {
                    Self::print_listing(self.registry.vehicles().iter());
                    Ok(())
                }
                2 => {
                    Self::print_listing(self.registry.items().iter());
                    Ok(())
                }
                3 => {
                    Self::print_listing(self.registry.posts().iter());
                    Ok(())
                }
                4 => {
                    println!("{}", self.registry.stats());
                    Ok(())
                }
                5 => self.remove_person_flow(),
                _ => break,
            };
            if let Err(e) = outcome {
                self.report(&e);
            }
        }
        Ok(())
    }

    fn remove_person_flow(&mut self) -> Result<()> {
        let cedula: String = Input::new().with_prompt("Cedula").interact_text()?;
        let confirm = Confirm::new()
            .with_prompt(format!("Remove person {}?", cedula))
            .default(false)
            .interact()?;
        if !confirm {
            return Ok(());
        }
        accounts::remove_person(&mut self.registry, &cedula)?;
        self.print_status("Person removed.");
        Ok(())
    }

    fn print_listing<T: std::fmt::Display>(entries: impl ExactSizeIterator<Item = T>) {
        if entries.len() == 0 {
            println!("  (none)");
            return;
        }
        for entry in entries {
            println!("  {}", entry);
        }
    }

    // ─── Demo Tour ───

    fn run_demo(&mut self, json: bool) -> Result<()> {
        self.seed_demo()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&self.registry.stats())?);
            return Ok(());
        }

        eprintln!("{}", style("People").bold().underlined());
        for person in self.registry.people() {
            println!("  {}", person);
        }
        eprintln!();

        let rider = self.registry.users()[0].cedula.clone();
        eprintln!("{}", style("Vehicles of the first rider").bold().underlined());
        for vehicle in fleet::vehicles_of(&self.registry, &rider)? {
            println!("  {}", vehicle);
        }
        eprintln!();

        eprintln!("{}", style("Friends of the first rider").bold().underlined());
        for friend in social::friends_of(&self.registry, &rider)? {
            println!("  {}", friend);
        }
        eprintln!();

        let provider = self.registry.providers()[0].cedula.clone();
        eprintln!("{}", style("Provider catalog").bold().underlined());
        for item in catalog::items_of(&self.registry, &provider)? {
            println!("  {}", item);
        }
        eprintln!();

        eprintln!("{}", style("Provider posts").bold().underlined());
        for post in catalog::posts_of(&self.registry, &provider)? {
            println!("  {}", post);
        }
        eprintln!();

        println!("{}", self.registry.stats());
        Ok(())
    }

    /// Seed a small, deterministic sample directory and exercise the main
    /// operations once (register, befriend, attach, authenticate).
    fn seed_demo(&mut self) -> Result<()> {
        self.print_status(&format!(
            "Seeding {} riders, 1 admin, 1 provider...",
            self.config.demo_people
        ));

        for i in 0..self.config.demo_people {
            accounts::register_user(
                &mut self.registry,
                &self.config,
                &format!("10{:06}", i + 1),
                &format!("Rider {}", i + 1),
                &format!("30012345{:02}", i % 100),
                "pedalea",
                &format!("rider{}@rolapet.dev", i + 1),
            )?;
        }

        accounts::register_admin(
            &mut self.registry,
            &self.config,
            "900000001",
            "Root Admin",
            "3009990001",
            "adminpass",
            "admin@rolapet.dev",
        )?;
        accounts::register_provider(
            &mut self.registry,
            &self.config,
            "900000002",
            "EcoMoto Taller",
            "3009990002",
            "tallerpass",
            "taller@rolapet.dev",
        )?;

        let rider = "10000001";
        fleet::register_vehicle(
            &mut self.registry,
            &self.config,
            rider,
            "Xiaomi",
            "M365 Pro",
            45,
            "scooter",
        )?;
        fleet::register_vehicle(
            &mut self.registry,
            &self.config,
            rider,
            "NIU",
            "NQi GT",
            80,
            "moto",
        )?;

        if self.config.demo_people > 1 {
            social::add_friend(&mut self.registry, rider, "10000002")?;
        }

        let provider = "900000002";
        catalog::offer_item(
            &mut self.registry,
            &self.config,
            provider,
            "Brake tune-up",
            "Full brake inspection and adjustment",
            "service",
        )?;
        catalog::offer_item(
            &mut self.registry,
            &self.config,
            provider,
            "City helmet",
            "Certified helmet for urban riding",
            "product",
        )?;
        catalog::publish_post(
            &mut self.registry,
            &self.config,
            provider,
            "Sunday city ride",
            "Group ride leaving from the central park at 9am",
            "event",
        )?;
        catalog::publish_post(
            &mut self.registry,
            &self.config,
            provider,
            "10% off tune-ups",
            "Valid through the end of the month",
            "promotion",
        )?;

        // Round-trip check: the seeded accounts can actually log in.
        accounts::authenticate_user(&self.registry, "rider1@rolapet.dev", "pedalea")?;
        accounts::authenticate_provider(&self.registry, provider, "tallerpass")?;

        Ok(())
    }

    // ─── Output Helpers ───

    fn report(&self, e: &Error) {
        self.print_warning(&e.to_string());
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}
