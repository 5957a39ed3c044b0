mod docx_converter_test;
