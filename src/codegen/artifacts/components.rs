//! Table, dialog and page components.
//!
//! These follow the shadcn-admin feature layout. Only the names they import
//! from each other and the columns they emit per field depend on the module.

use super::provider::context_hook_name;
use super::schema::list_schema_name;
use super::RenderContext;
use crate::codegen::document::{Import, Item, TsModule};
use crate::codegen::fields::{FieldKind, FieldSpec};
use crate::codegen::utils::{display_label, display_lower};
use std::fmt::{self, Write};

/// `components/<dash>-columns.tsx`
pub(super) fn columns(ctx: RenderContext<'_>) -> TsModule {
    let mut module = TsModule::new()
        .import(Import::new(["type ColumnDef"], "@tanstack/react-table"))
        .import(Import::new(["Checkbox"], "@/components/ui/checkbox"))
        .import(Import::new(["DataTableColumnHeader"], "@/components/data-table"));

    if ctx.fields.has_status_field {
        module = module
            .import(Import::new(["Badge"], "@/components/ui/badge"))
            .import(Import::new(["statusColors"], "../data/data"));
    }

    module
        .import(Import::new([format!("type {}", ctx.names.pascal)], "../data/schema"))
        .import(Import::new(["DataTableRowActions"], "./data-table-row-actions"))
        .item(Item::raw_with(|out| write_columns(out, ctx)))
}

fn write_columns(out: &mut String, ctx: RenderContext<'_>) -> fmt::Result {
    writeln!(
        out,
        "export const {}Columns: ColumnDef<{}>[] = [",
        ctx.names.camel, ctx.names.pascal
    )?;

    writeln!(out, "  {{")?;
    writeln!(out, "    id: 'select',")?;
    writeln!(out, "    header: ({{ table }}) => (")?;
    writeln!(out, "      <Checkbox")?;
    writeln!(out, "        checked={{table.getIsAllPageRowsSelected()}}")?;
    writeln!(
        out,
        "        onCheckedChange={{(value) => table.toggleAllPageRowsSelected(!!value)}}"
    )?;
    writeln!(out, "        aria-label='Select all'")?;
    writeln!(out, "      />")?;
    writeln!(out, "    ),")?;
    writeln!(out, "    cell: ({{ row }}) => (")?;
    writeln!(out, "      <Checkbox")?;
    writeln!(out, "        checked={{row.getIsSelected()}}")?;
    writeln!(out, "        onCheckedChange={{(value) => row.toggleSelected(!!value)}}")?;
    writeln!(out, "        aria-label='Select row'")?;
    writeln!(out, "      />")?;
    writeln!(out, "    ),")?;
    writeln!(out, "    enableSorting: false,")?;
    writeln!(out, "    enableHiding: false,")?;
    writeln!(out, "  }},")?;

    // ids are not shown as a column
    for field in ctx.fields.iter().filter(|f| f.kind != FieldKind::Identifier) {
        write_field_column(out, field)?;
    }

    writeln!(out, "  {{")?;
    writeln!(out, "    id: 'actions',")?;
    writeln!(out, "    cell: DataTableRowActions,")?;
    writeln!(out, "  }},")?;
    writeln!(out, "]")
}

fn write_field_column(out: &mut String, field: &FieldSpec) -> fmt::Result {
    let name = &field.name;

    writeln!(out, "  {{")?;
    writeln!(out, "    accessorKey: '{}',", name)?;
    writeln!(out, "    header: ({{ column }}) => (")?;
    writeln!(
        out,
        "      <DataTableColumnHeader column={{column}} title='{}' />",
        display_label(name)
    )?;
    writeln!(out, "    ),")?;

    match field.kind {
        FieldKind::Status => {
            writeln!(out, "    cell: ({{ row }}) => {{")?;
            writeln!(out, "      const status = row.getValue<string>('{}')", name)?;
            writeln!(out, "      return (")?;
            writeln!(
                out,
                "        <Badge variant='outline' className={{statusColors.get(status)}}>"
            )?;
            writeln!(out, "          {{status}}")?;
            writeln!(out, "        </Badge>")?;
            writeln!(out, "      )")?;
            writeln!(out, "    }},")?;
            writeln!(out, "    filterFn: (row, id, value) => value.includes(row.getValue(id)),")?;
        }
        FieldKind::Timestamp => {
            writeln!(
                out,
                "    cell: ({{ row }}) => <div>{{row.getValue<Date>('{}').toLocaleDateString()}}</div>,",
                name
            )?;
        }
        FieldKind::Identifier | FieldKind::Generic => {
            writeln!(
                out,
                "    cell: ({{ row }}) => <div>{{row.getValue<string>('{}')}}</div>,",
                name
            )?;
        }
    }

    writeln!(out, "  }},")
}

/// `components/<dash>-table.tsx`
pub(super) fn table(ctx: RenderContext<'_>) -> TsModule {
    let mut module = TsModule::new()
        .import(Import::new(["useState"], "react"))
        .import(Import::new(
            [
                "type ColumnFiltersState",
                "type SortingState",
                "type VisibilityState",
                "flexRender",
                "getCoreRowModel",
                "getFacetedRowModel",
                "getFacetedUniqueValues",
                "getFilteredRowModel",
                "getPaginationRowModel",
                "getSortedRowModel",
                "useReactTable",
            ],
            "@tanstack/react-table",
        ))
        .import(Import::new(
            ["Table", "TableBody", "TableCell", "TableHead", "TableHeader", "TableRow"],
            "@/components/ui/table",
        ))
        .import(Import::new(
            ["DataTablePagination", "DataTableToolbar"],
            "@/components/data-table",
        ));

    if ctx.fields.has_status_field {
        module = module.import(Import::new(["statuses"], "../data/data"));
    }

    module
        .import(Import::new([format!("type {}", ctx.names.pascal)], "../data/schema"))
        .import(Import::new(["DataTableBulkActions"], "./data-table-bulk-actions"))
        .import(Import::new(
            [format!("{}Columns as columns", ctx.names.camel)],
            format!("./{}-columns", ctx.names.dash),
        ))
        .item(Item::raw_with(|out| {
            writeln!(out, "type DataTableProps = {{")?;
            writeln!(out, "  data: {}[]", ctx.names.pascal)?;
            writeln!(out, "}}")
        }))
        .item(Item::raw_with(|out| write_table(out, ctx)))
}

fn write_table(out: &mut String, ctx: RenderContext<'_>) -> fmt::Result {
    writeln!(out, "export function {}Table({{ data }}: DataTableProps) {{", ctx.names.pascal)?;
    writeln!(out, "  const [rowSelection, setRowSelection] = useState({{}})")?;
    writeln!(
        out,
        "  const [columnVisibility, setColumnVisibility] = useState<VisibilityState>({{}})"
    )?;
    writeln!(out, "  const [columnFilters, setColumnFilters] = useState<ColumnFiltersState>([])")?;
    writeln!(out, "  const [sorting, setSorting] = useState<SortingState>([])\n")?;

    writeln!(out, "  const table = useReactTable({{")?;
    writeln!(out, "    data,")?;
    writeln!(out, "    columns,")?;
    writeln!(out, "    state: {{ sorting, columnVisibility, rowSelection, columnFilters }},")?;
    writeln!(out, "    enableRowSelection: true,")?;
    writeln!(out, "    onRowSelectionChange: setRowSelection,")?;
    writeln!(out, "    onSortingChange: setSorting,")?;
    writeln!(out, "    onColumnFiltersChange: setColumnFilters,")?;
    writeln!(out, "    onColumnVisibilityChange: setColumnVisibility,")?;
    writeln!(out, "    getCoreRowModel: getCoreRowModel(),")?;
    writeln!(out, "    getFilteredRowModel: getFilteredRowModel(),")?;
    writeln!(out, "    getPaginationRowModel: getPaginationRowModel(),")?;
    writeln!(out, "    getSortedRowModel: getSortedRowModel(),")?;
    writeln!(out, "    getFacetedRowModel: getFacetedRowModel(),")?;
    writeln!(out, "    getFacetedUniqueValues: getFacetedUniqueValues(),")?;
    writeln!(out, "  }})\n")?;

    writeln!(out, "  return (")?;
    writeln!(out, "    <div className='space-y-4'>")?;
    writeln!(out, "      <DataTableToolbar")?;
    writeln!(out, "        table={{table}}")?;
    if let Some(search) = ctx.fields.title_field() {
        writeln!(
            out,
            "        searchPlaceholder='Filter {}...'",
            display_lower(&search.name)
        )?;
        writeln!(out, "        searchKey='{}'", search.name)?;
    }
    if ctx.fields.has_status_field {
        writeln!(out, "        filters={{[")?;
        writeln!(out, "          {{ columnId: 'status', title: 'Status', options: statuses }},")?;
        writeln!(out, "        ]}}")?;
    }
    writeln!(out, "      />")?;
    writeln!(out, "      <div className='overflow-hidden rounded-md border'>")?;
    writeln!(out, "        <Table>")?;
    writeln!(out, "          <TableHeader>")?;
    writeln!(out, "            {{table.getHeaderGroups().map((headerGroup) => (")?;
    writeln!(out, "              <TableRow key={{headerGroup.id}}>")?;
    writeln!(out, "                {{headerGroup.headers.map((header) => (")?;
    writeln!(out, "                  <TableHead key={{header.id}} colSpan={{header.colSpan}}>")?;
    writeln!(out, "                    {{header.isPlaceholder")?;
    writeln!(out, "                      ? null")?;
    writeln!(
        out,
        "                      : flexRender(header.column.columnDef.header, header.getContext())}}"
    )?;
    writeln!(out, "                  </TableHead>")?;
    writeln!(out, "                ))}}")?;
    writeln!(out, "              </TableRow>")?;
    writeln!(out, "            ))}}")?;
    writeln!(out, "          </TableHeader>")?;
    writeln!(out, "          <TableBody>")?;
    writeln!(out, "            {{table.getRowModel().rows?.length ? (")?;
    writeln!(out, "              table.getRowModel().rows.map((row) => (")?;
    writeln!(
        out,
        "                <TableRow key={{row.id}} data-state={{row.getIsSelected() && 'selected'}}>"
    )?;
    writeln!(out, "                  {{row.getVisibleCells().map((cell) => (")?;
    writeln!(out, "                    <TableCell key={{cell.id}}>")?;
    writeln!(
        out,
        "                      {{flexRender(cell.column.columnDef.cell, cell.getContext())}}"
    )?;
    writeln!(out, "                    </TableCell>")?;
    writeln!(out, "                  ))}}")?;
    writeln!(out, "                </TableRow>")?;
    writeln!(out, "              ))")?;
    writeln!(out, "            ) : (")?;
    writeln!(out, "              <TableRow>")?;
    writeln!(
        out,
        "                <TableCell colSpan={{columns.length}} className='h-24 text-center'>"
    )?;
    writeln!(out, "                  No results.")?;
    writeln!(out, "                </TableCell>")?;
    writeln!(out, "              </TableRow>")?;
    writeln!(out, "            )}}")?;
    writeln!(out, "          </TableBody>")?;
    writeln!(out, "        </Table>")?;
    writeln!(out, "      </div>")?;
    writeln!(out, "      <DataTablePagination table={{table}} />")?;
    writeln!(out, "      <DataTableBulkActions table={{table}} />")?;
    writeln!(out, "    </div>")?;
    writeln!(out, "  )")?;
    writeln!(out, "}}")
}

/// `components/data-table-row-actions.tsx`
pub(super) fn row_actions(ctx: RenderContext<'_>) -> TsModule {
    let hook = context_hook_name(ctx.names);

    TsModule::new()
        .import(Import::new(["type Row"], "@tanstack/react-table"))
        .import(Import::new(["MoreHorizontal", "Pencil", "Trash2"], "lucide-react"))
        .import(Import::new(["Button"], "@/components/ui/button"))
        .import(Import::new(
            [
                "DropdownMenu",
                "DropdownMenuContent",
                "DropdownMenuItem",
                "DropdownMenuSeparator",
                "DropdownMenuTrigger",
            ],
            "@/components/ui/dropdown-menu",
        ))
        .import(Import::new([format!("type {}", ctx.names.pascal)], "../data/schema"))
        .import(Import::new([hook.clone()], format!("./{}-provider", ctx.names.dash)))
        .item(Item::raw_with(|out| {
            writeln!(out, "type DataTableRowActionsProps = {{")?;
            writeln!(out, "  row: Row<{}>", ctx.names.pascal)?;
            writeln!(out, "}}")
        }))
        .item(Item::raw_with(|out| {
            writeln!(
                out,
                "export function DataTableRowActions({{ row }}: DataTableRowActionsProps) {{"
            )?;
            writeln!(out, "  const {{ setOpen, setCurrentRow }} = {}()", hook)?;
            writeln!(out, "  return (")?;
            writeln!(out, "    <DropdownMenu modal={{false}}>")?;
            writeln!(out, "      <DropdownMenuTrigger asChild>")?;
            writeln!(
                out,
                "        <Button variant='ghost' className='flex h-8 w-8 p-0 data-[state=open]:bg-muted'>"
            )?;
            writeln!(out, "          <MoreHorizontal className='h-4 w-4' />")?;
            writeln!(out, "          <span className='sr-only'>Open menu</span>")?;
            writeln!(out, "        </Button>")?;
            writeln!(out, "      </DropdownMenuTrigger>")?;
            writeln!(out, "      <DropdownMenuContent align='end' className='w-[160px]'>")?;
            writeln!(out, "        <DropdownMenuItem")?;
            writeln!(out, "          onClick={{() => {{")?;
            writeln!(out, "            setCurrentRow(row.original)")?;
            writeln!(out, "            setOpen('edit')")?;
            writeln!(out, "          }}}}")?;
            writeln!(out, "        >")?;
            writeln!(out, "          Edit")?;
            writeln!(out, "          <Pencil className='ml-auto h-4 w-4' />")?;
            writeln!(out, "        </DropdownMenuItem>")?;
            writeln!(out, "        <DropdownMenuSeparator />")?;
            writeln!(out, "        <DropdownMenuItem")?;
            writeln!(out, "          onClick={{() => {{")?;
            writeln!(out, "            setCurrentRow(row.original)")?;
            writeln!(out, "            setOpen('delete')")?;
            writeln!(out, "          }}}}")?;
            writeln!(out, "          className='text-red-500!'")?;
            writeln!(out, "        >")?;
            writeln!(out, "          Delete")?;
            writeln!(out, "          <Trash2 className='ml-auto h-4 w-4' />")?;
            writeln!(out, "        </DropdownMenuItem>")?;
            writeln!(out, "      </DropdownMenuContent>")?;
            writeln!(out, "    </DropdownMenu>")?;
            writeln!(out, "  )")?;
            writeln!(out, "}}")
        }))
}

/// `components/data-table-bulk-actions.tsx`
pub(super) fn bulk_actions(ctx: RenderContext<'_>) -> TsModule {
    let hook = context_hook_name(ctx.names);

    TsModule::new()
        .import(Import::new(["type Table"], "@tanstack/react-table"))
        .import(Import::new(["Trash2"], "lucide-react"))
        .import(Import::new(["Button"], "@/components/ui/button"))
        .import(Import::new([format!("type {}", ctx.names.pascal)], "../data/schema"))
        .import(Import::new([hook.clone()], format!("./{}-provider", ctx.names.dash)))
        .item(Item::raw_with(|out| {
            writeln!(out, "type DataTableBulkActionsProps = {{")?;
            writeln!(out, "  table: Table<{}>", ctx.names.pascal)?;
            writeln!(out, "}}")
        }))
        .item(Item::raw_with(|out| {
            writeln!(
                out,
                "export function DataTableBulkActions({{ table }}: DataTableBulkActionsProps) {{"
            )?;
            writeln!(out, "  const {{ setOpen }} = {}()", hook)?;
            writeln!(
                out,
                "  const selectedCount = table.getFilteredSelectedRowModel().rows.length\n"
            )?;
            writeln!(out, "  if (selectedCount === 0) return null\n")?;
            writeln!(out, "  return (")?;
            writeln!(out, "    <div className='flex items-center gap-2'>")?;
            writeln!(
                out,
                "      <span className='text-sm text-muted-foreground'>{{selectedCount}} selected</span>"
            )?;
            writeln!(
                out,
                "      <Button variant='destructive' size='sm' onClick={{() => setOpen('multi-delete')}}>"
            )?;
            writeln!(out, "        <Trash2 className='h-4 w-4' />")?;
            writeln!(out, "        Delete selected")?;
            writeln!(out, "      </Button>")?;
            writeln!(out, "    </div>")?;
            writeln!(out, "  )")?;
            writeln!(out, "}}")
        }))
}

/// `components/<dash>-primary-buttons.tsx`
pub(super) fn primary_buttons(ctx: RenderContext<'_>) -> TsModule {
    let hook = context_hook_name(ctx.names);

    TsModule::new()
        .import(Import::new(["Plus"], "lucide-react"))
        .import(Import::new(["Button"], "@/components/ui/button"))
        .import(Import::new([hook.clone()], format!("./{}-provider", ctx.names.dash)))
        .item(Item::raw_with(|out| {
            writeln!(out, "export function {}PrimaryButtons() {{", ctx.names.pascal)?;
            writeln!(out, "  const {{ setOpen }} = {}()", hook)?;
            writeln!(out, "  return (")?;
            writeln!(out, "    <div className='flex gap-2'>")?;
            writeln!(out, "      <Button className='space-x-1' onClick={{() => setOpen('add')}}>")?;
            writeln!(
                out,
                "        <span>Add {}</span> <Plus size={{18}} />",
                display_label(&ctx.names.pascal)
            )?;
            writeln!(out, "      </Button>")?;
            writeln!(out, "    </div>")?;
            writeln!(out, "  )")?;
            writeln!(out, "}}")
        }))
}

/// `components/<dash>-dialogs.tsx`
pub(super) fn dialogs(ctx: RenderContext<'_>) -> TsModule {
    let hook = context_hook_name(ctx.names);

    TsModule::new()
        .import(Import::new(["Button"], "@/components/ui/button"))
        .import(Import::new(
            [
                "Dialog",
                "DialogContent",
                "DialogDescription",
                "DialogFooter",
                "DialogHeader",
                "DialogTitle",
            ],
            "@/components/ui/dialog",
        ))
        .import(Import::new(["Input"], "@/components/ui/input"))
        .import(Import::new(["Label"], "@/components/ui/label"))
        .import(Import::new(["ConfirmDialog"], "@/components/confirm-dialog"))
        .import(Import::new([hook.clone()], format!("./{}-provider", ctx.names.dash)))
        .item(Item::raw_with(|out| write_dialogs(out, ctx, &hook)))
}

fn write_dialogs(out: &mut String, ctx: RenderContext<'_>, hook: &str) -> fmt::Result {
    let label = display_label(&ctx.names.pascal);
    let lower = display_lower(&ctx.names.pascal);
    let row_label = ctx
        .fields
        .title_field()
        .map(|f| f.name.as_str())
        .or_else(|| ctx.fields.iter().next().map(|f| f.name.as_str()));

    writeln!(out, "export function {}Dialogs() {{", ctx.names.pascal)?;
    writeln!(out, "  const {{ open, setOpen, currentRow, setCurrentRow }} = {}()\n", hook)?;
    writeln!(out, "  const closeDialog = () => {{")?;
    writeln!(out, "    setOpen(null)")?;
    writeln!(out, "    setTimeout(() => setCurrentRow(null), 500)")?;
    writeln!(out, "  }}\n")?;

    writeln!(out, "  return (")?;
    writeln!(out, "    <>")?;
    writeln!(out, "      <Dialog")?;
    writeln!(out, "        open={{open === 'add' || open === 'edit'}}")?;
    writeln!(out, "        onOpenChange={{(state) => !state && closeDialog()}}")?;
    writeln!(out, "      >")?;
    writeln!(out, "        <DialogContent className='sm:max-w-lg'>")?;
    writeln!(out, "          <DialogHeader>")?;
    writeln!(
        out,
        "            <DialogTitle>{{open === 'edit' ? 'Edit {}' : 'Add {}'}}</DialogTitle>",
        label, label
    )?;
    writeln!(out, "            <DialogDescription>")?;
    writeln!(out, "              Fill in the details below and click save when you're done.")?;
    writeln!(out, "            </DialogDescription>")?;
    writeln!(out, "          </DialogHeader>")?;
    writeln!(out, "          <div className='grid gap-4 py-2'>")?;
    for field in ctx.fields.iter().filter(|f| f.kind == FieldKind::Generic) {
        writeln!(out, "            <div className='grid gap-2'>")?;
        writeln!(
            out,
            "              <Label htmlFor='{}'>{}</Label>",
            field.name,
            display_label(&field.name)
        )?;
        writeln!(
            out,
            "              <Input id='{}' defaultValue={{currentRow?.{} ?? ''}} />",
            field.name, field.name
        )?;
        writeln!(out, "            </div>")?;
    }
    writeln!(out, "          </div>")?;
    writeln!(out, "          <DialogFooter>")?;
    writeln!(out, "            <Button onClick={{closeDialog}}>Save changes</Button>")?;
    writeln!(out, "          </DialogFooter>")?;
    writeln!(out, "        </DialogContent>")?;
    writeln!(out, "      </Dialog>\n")?;

    writeln!(out, "      <ConfirmDialog")?;
    writeln!(out, "        destructive")?;
    writeln!(out, "        open={{open === 'delete'}}")?;
    writeln!(out, "        onOpenChange={{(state) => !state && closeDialog()}}")?;
    writeln!(out, "        title='Delete {}'", lower)?;
    match row_label {
        Some(field) => writeln!(
            out,
            "        desc={{`Are you sure you want to delete ${{currentRow?.{} ?? 'this {}'}}?`}}",
            field, lower
        )?,
        None => writeln!(out, "        desc='Are you sure you want to delete this {}?'", lower)?,
    }
    writeln!(out, "        confirmText='Delete'")?;
    writeln!(out, "        handleConfirm={{closeDialog}}")?;
    writeln!(out, "      />\n")?;

    writeln!(out, "      <ConfirmDialog")?;
    writeln!(out, "        destructive")?;
    writeln!(out, "        open={{open === 'multi-delete'}}")?;
    writeln!(out, "        onOpenChange={{(state) => !state && closeDialog()}}")?;
    writeln!(out, "        title='Delete selected {}'", lower)?;
    writeln!(out, "        desc='This action cannot be undone.'")?;
    writeln!(out, "        confirmText='Delete'")?;
    writeln!(out, "        handleConfirm={{closeDialog}}")?;
    writeln!(out, "      />")?;
    writeln!(out, "    </>")?;
    writeln!(out, "  )")?;
    writeln!(out, "}}")
}

/// `index.tsx`
pub(super) fn index(ctx: RenderContext<'_>) -> TsModule {
    let names = ctx.names;
    let component = |suffix: &str| format!("./components/{}-{}", names.dash, suffix);

    TsModule::new()
        .import(Import::new(["Header"], "@/components/layout/header"))
        .import(Import::new(["Main"], "@/components/layout/main"))
        .import(Import::new([format!("{}Dialogs", names.pascal)], component("dialogs")))
        .import(Import::new(
            [format!("{}PrimaryButtons", names.pascal)],
            component("primary-buttons"),
        ))
        .import(Import::new([format!("{}Provider", names.pascal)], component("provider")))
        .import(Import::new([format!("{}Table", names.pascal)], component("table")))
        .import(Import::new([list_schema_name(names)], "./data/schema"))
        .item(Item::Comment("Replace with data loaded from your API".to_string()))
        .item(Item::raw_with(|out| {
            writeln!(out, "const {}Data = {}.parse([])", names.camel, list_schema_name(names))
        }))
        .item(Item::raw_with(|out| {
            writeln!(out, "export function {}() {{", names.pascal)?;
            writeln!(out, "  return (")?;
            writeln!(out, "    <{}Provider>", names.pascal)?;
            writeln!(out, "      <Header fixed />\n")?;
            writeln!(out, "      <Main>")?;
            writeln!(
                out,
                "        <div className='mb-2 flex flex-wrap items-center justify-between gap-x-4 space-y-2'>"
            )?;
            writeln!(out, "          <div>")?;
            writeln!(
                out,
                "            <h2 className='text-2xl font-bold tracking-tight'>{}</h2>",
                display_label(&names.pascal)
            )?;
            writeln!(out, "            <p className='text-muted-foreground'>")?;
            writeln!(out, "              Manage your {} here.", display_lower(&names.pascal))?;
            writeln!(out, "            </p>")?;
            writeln!(out, "          </div>")?;
            writeln!(out, "          <{}PrimaryButtons />", names.pascal)?;
            writeln!(out, "        </div>")?;
            writeln!(
                out,
                "        <div className='-mx-4 flex-1 overflow-auto px-4 py-1 lg:flex-row lg:space-y-0 lg:space-x-12'>"
            )?;
            writeln!(out, "          <{}Table data={{{}Data}} />", names.pascal, names.camel)?;
            writeln!(out, "        </div>")?;
            writeln!(out, "      </Main>\n")?;
            writeln!(out, "      <{}Dialogs />", names.pascal)?;
            writeln!(out, "    </{}Provider>", names.pascal)?;
            writeln!(out, "  )")?;
            writeln!(out, "}}")
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::fields::{build_plan, FieldPlan, DEFAULT_FIELDS};
    use crate::codegen::naming::ModuleName;

    fn context(module: &str, fields: &[&str]) -> (ModuleName, FieldPlan) {
        (
            ModuleName::new(module).unwrap(),
            build_plan(fields, &DEFAULT_FIELDS).unwrap(),
        )
    }

    #[test]
    fn test_columns_follow_field_plan() {
        let fields = ["id", "name", "price", "status", "createdAt"];
        let (names, plan) = context("product-list", &fields);
        let text = columns(RenderContext::new(&names, &plan)).render();

        assert!(text.contains("export const productListColumns: ColumnDef<ProductList>[] = ["));
        assert!(!text.contains("accessorKey: 'id'"));

        let name_at = text.find("accessorKey: 'name'").unwrap();
        let price_at = text.find("accessorKey: 'price'").unwrap();
        let status_at = text.find("accessorKey: 'status'").unwrap();
        assert!(name_at < price_at && price_at < status_at);

        assert!(text.contains("title='Created At'"));
        assert!(text.contains("import { statusColors } from '../data/data'"));
        assert!(text.contains("toLocaleDateString()"));
    }

    #[test]
    fn test_columns_without_status_skip_badges() {
        let (names, plan) = context("tags", &["id", "label"]);
        let text = columns(RenderContext::new(&names, &plan)).render();

        assert!(!text.contains("statusColors"));
        assert!(!text.contains("Badge"));
    }

    #[test]
    fn test_table_filters_gated_on_status() {
        let (names, plan) = context("users", &[]);
        let text = table(RenderContext::new(&names, &plan)).render();
        assert!(text.contains("import { statuses } from '../data/data'"));
        assert!(text.contains("searchKey='name'"));

        let (names, plan) = context("tags", &["id", "label"]);
        let text = table(RenderContext::new(&names, &plan)).render();
        assert!(!text.contains("statuses"));
        assert!(text.contains("searchKey='label'"));
    }

    #[test]
    fn test_dialogs_cover_every_dialog_type() {
        let (names, plan) = context("product-list", &["id", "name", "price"]);
        let text = dialogs(RenderContext::new(&names, &plan)).render();

        for dialog in ["'add'", "'edit'", "'delete'", "'multi-delete'"] {
            assert!(text.contains(dialog), "missing dialog {}", dialog);
        }
        assert!(text.contains("<Input id='price' defaultValue={currentRow?.price ?? ''} />"));
        assert!(text.contains("title='Delete product list'"));
    }

    #[test]
    fn test_index_wires_components() {
        let (names, plan) = context("product-list", &[]);
        let text = index(RenderContext::new(&names, &plan)).render();

        assert!(text.contains("import { productListListSchema } from './data/schema'"));
        assert!(text.contains("const productListData = productListListSchema.parse([])"));
        assert!(text.contains("export function ProductList() {"));
        assert!(text.contains("<ProductListTable data={productListData} />"));
        assert!(text.contains(
            "<h2 className='text-2xl font-bold tracking-tight'>Product List</h2>"
        ));
    }
}
