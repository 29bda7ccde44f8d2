use crate::domain::task::Task;

/// Index page: add form, client-side filters, and the task list.
pub fn index_page(tasks: &[Task]) -> String {
    let mut items = String::new();
    for task in tasks {
        let checked = if task.completed { " checked" } else { "" };
        items.push_str(&format!(
            r#"      <li class="list-group-item">
        <input type="checkbox"{checked} onclick="toggleCompletion({id})">
        <span class="task">{description}</span>
        <span class="due-date">{due_date}</span>
        <span class="category">{category}</span>
        <a href="/edit?id={id}">Edit</a>
        <a href="/delete?id={id}">Delete</a>
      </li>
"#,
            id = task.id.0,
            checked = checked,
            description = escape(&task.description),
            due_date = due_date_text(task),
            category = escape(&task.category),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Tasks</title>
  </head>
  <body>
    <h1>Tasks</h1>
    <form action="/add" method="post">
      <input type="text" name="task" placeholder="What needs doing?">
      <input type="date" name="due_date">
      <input type="text" name="category" placeholder="Category">
      <button type="submit">Add</button>
    </form>
    <div class="filters">
      <button onclick="filterTasks('all')">All</button>
      <button onclick="filterTasks('pending')">Pending</button>
      <button onclick="filterTasks('completed')">Completed</button>
    </div>
    <ul class="list-group">
{items}    </ul>
    <script src="/static/js/scripts.js"></script>
  </body>
</html>
"#,
    )
}

/// Edit page: the form comes back pre-filled with the stored row.
pub fn edit_page(task: &Task) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Edit task</title>
  </head>
  <body>
    <h1>Edit task</h1>
    <form action="/edit" method="post">
      <input type="hidden" name="id" value="{id}">
      <input type="text" name="task" value="{description}">
      <input type="date" name="due_date" value="{due_date}">
      <input type="text" name="category" value="{category}">
      <button type="submit">Save</button>
    </form>
    <a href="/">Back</a>
  </body>
</html>
"#,
        id = task.id.0,
        description = escape(&task.description),
        due_date = due_date_text(task),
        category = escape(&task.category),
    )
}

fn due_date_text(task: &Task) -> String {
    task.due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
