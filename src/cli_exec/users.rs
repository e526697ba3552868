use market_console::model::{UserProfile, UserUpdate};
use market_console::views::UserFilter;

use super::*;

fn print_user_line(u: &UserProfile) {
    println!("{} {} <{}> {}", u.id, u.name, u.email, u.role);
}

pub(super) fn handle_users_command(console: &Console, command: UsersCommands) -> Result<()> {
    console.require_view(View::Users)?;
    let users_api = console.client.users();

    match command {
        UsersCommands::List { search, role, json } => {
            let users = users_api.get_all().context("list users")?;
            let filtered = UserFilter { search, role }.apply(&users);
            if json {
                print_json(&filtered, "users")?;
            } else {
                for u in &filtered {
                    print_user_line(u);
                }
                let n = filtered.len();
                println!("{} user{}", n, if n == 1 { "" } else { "s" });
            }
        }
        UsersCommands::Get { id, json } => {
            let user = users_api.get_by_id(id).context("get user")?;
            if json {
                print_json(&user, "user")?;
            } else {
                print_user_line(&user);
            }
        }
        UsersCommands::Update {
            id,
            name,
            email,
            role,
            password,
            json,
        } => {
            let updated = users_api
                .update(
                    id,
                    &UserUpdate {
                        name,
                        email,
                        password,
                        role,
                    },
                )
                .context("update user")?;
            if json {
                print_json(&updated, "user")?;
            } else {
                println!("Updated user {}", updated.id);
            }
        }
        UsersCommands::Delete { id } => {
            if console.session().current_user().is_some_and(|me| me.id == id) {
                anyhow::bail!("refusing to delete the logged-in user");
            }
            users_api.delete(id).context("delete user")?;
            println!("Deleted user {}", id);
        }
    }
    Ok(())
}
