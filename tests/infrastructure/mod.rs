mod spreadsheet_test;
